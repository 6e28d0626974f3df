use super::NumericError;

/// Numeric one-sided Laplace transform of a sampled function.
///
/// Approximates `∫ exp(-s t) g(t) dt` with the left-rectangle rule over the first
/// `length` samples: `F = Σ_{i<length} exp(-s * i * timestep) * g[i] * timestep`.
///
/// The transform variable is not validated. It is meaningful for `s > 0`; at
/// `s = 0` the result is the scaled sum `timestep * Σ g[i]`.
///
/// # Errors
///
/// Returns [`NumericError::InvalidInput`] if `length` exceeds the series length.
pub fn laplace(series: &[f64], timestep: f64, s: f64, length: usize) -> Result<f64, NumericError> {
    let window = series.get(..length).ok_or_else(|| {
        NumericError::InvalidInput(format!(
            "Laplace transform length {} exceeds series length {}",
            length,
            series.len()
        ))
    })?;
    Ok(laplace_series(window, timestep, s))
}

/// Laplace transform over the whole slice.
#[inline]
pub fn laplace_series(series: &[f64], timestep: f64, s: f64) -> f64 {
    series
        .iter()
        .enumerate()
        .map(|(i, g)| (-s * i as f64 * timestep).exp() * g * timestep)
        .sum()
}
