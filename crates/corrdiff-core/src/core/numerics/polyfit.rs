use super::NumericError;
use nalgebra::{DMatrix, DVector};

/// Least-squares polynomial fit of the given degree.
///
/// Builds the Vandermonde design matrix `X`, forms the normal equations
/// `(XᵗX) c = Xᵗy` and solves them by LU decomposition with partial pivoting.
/// Coefficients are returned from the constant term upwards, so the result has
/// `degree + 1` entries.
///
/// # Errors
///
/// - [`NumericError::InvalidInput`] if `x` and `y` differ in length.
/// - [`NumericError::SingularMatrix`] if the normal equations cannot be solved, e.g.
///   when there are fewer distinct `x` values than coefficients.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>, NumericError> {
    if x.len() != y.len() {
        return Err(NumericError::InvalidInput(format!(
            "x and y lengths differ ({} vs {})",
            x.len(),
            y.len()
        )));
    }

    let n_coeffs = degree + 1;
    let design = DMatrix::from_fn(x.len(), n_coeffs, |row, col| x[row].powi(col as i32));
    let design_t = design.transpose();
    let normal = &design_t * &design;
    let rhs = &design_t * DVector::from_column_slice(y);

    normal
        .lu()
        .solve(&rhs)
        .map(|coeffs| coeffs.iter().copied().collect())
        .ok_or(NumericError::SingularMatrix)
}
