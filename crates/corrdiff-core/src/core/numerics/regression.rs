use super::NumericError;
use tracing::debug;

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Exponential decay `y = amplitude * exp(-rate * x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFit {
    pub amplitude: f64,
    pub rate: f64,
}

impl ExponentialFit {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.amplitude * (-self.rate * x).exp()
    }
}

fn check_paired(x: &[f64], y: &[f64]) -> Result<(), NumericError> {
    if x.len() != y.len() {
        return Err(NumericError::InvalidInput(format!(
            "x and y lengths differ ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(NumericError::InvalidInput(
            "regression requires at least one point".into(),
        ));
    }
    Ok(())
}

/// Fits a straight line through `(x, y)` using the closed-form normal equations.
///
/// `m = (nΣxy - ΣxΣy) / (nΣx² - (Σx)²)` and `b = (Σy - mΣx) / n`.
///
/// # Errors
///
/// - [`NumericError::InvalidInput`] for mismatched or empty inputs.
/// - [`NumericError::DegenerateInput`] when all `x` are identical.
pub fn least_squares_line(x: &[f64], y: &[f64]) -> Result<LinearFit, NumericError> {
    check_paired(x, y)?;

    let n = x.len() as f64;
    let s_x: f64 = x.iter().sum();
    let s_y: f64 = y.iter().sum();
    let s_xx: f64 = x.iter().map(|v| v * v).sum();
    let s_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let denominator = n * s_xx - s_x * s_x;
    if denominator == 0.0 {
        return Err(NumericError::DegenerateInput(
            "all x values are identical".into(),
        ));
    }

    let slope = (n * s_xy - s_x * s_y) / denominator;
    let intercept = (s_y - slope * s_x) / n;
    debug!("Least-squares line: slope = {:e}, intercept = {:e}", slope, intercept);

    Ok(LinearFit { slope, intercept })
}

/// Fits `y = A * exp(-b * x)` by regressing `ln y` on `x`.
///
/// # Errors
///
/// Returns [`NumericError::Domain`] if any `y` is not strictly positive, plus the
/// errors of [`least_squares_line`].
pub fn exp_fit_log_linear(x: &[f64], y: &[f64]) -> Result<ExponentialFit, NumericError> {
    check_paired(x, y)?;

    let ln_y = y
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if v > 0.0 {
                Ok(v.ln())
            } else {
                Err(NumericError::Domain(format!(
                    "cannot take the logarithm of y[{}] = {}",
                    i, v
                )))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let line = least_squares_line(x, &ln_y)?;
    Ok(ExponentialFit {
        amplitude: line.intercept.exp(),
        rate: -line.slope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn recovers_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| -1.5 * v + 4.0).collect();
        let fit = least_squares_line(&x, &y).unwrap();
        assert!(f64_approx_equal(fit.slope, -1.5));
        assert!(f64_approx_equal(fit.intercept, 4.0));
        assert!(f64_approx_equal(fit.evaluate(2.0), 1.0));
    }

    #[test]
    fn symmetric_noise_leaves_line_unchanged() {
        let x = [1.0, 1.0, 2.0, 2.0];
        let y = [2.1, 1.9, 4.1, 3.9];
        let fit = least_squares_line(&x, &y).unwrap();
        assert!(f64_approx_equal(fit.slope, 2.0));
        assert!(f64_approx_equal(fit.intercept, 0.0));
    }

    #[test]
    fn identical_x_values_are_degenerate() {
        let result = least_squares_line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(NumericError::DegenerateInput(_))));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let result = least_squares_line(&[1.0, 2.0], &[1.0]);
        assert!(matches!(result, Err(NumericError::InvalidInput(_))));
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = least_squares_line(&[], &[]);
        assert!(matches!(result, Err(NumericError::InvalidInput(_))));
    }

    #[test]
    fn exponential_fit_recovers_amplitude_and_rate() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 5.0 * (-0.1 * v).exp()).collect();
        let fit = exp_fit_log_linear(&x, &y).unwrap();
        assert!(f64_approx_equal(fit.amplitude, 5.0));
        assert!(f64_approx_equal(fit.rate, 0.1));
    }

    #[test]
    fn exponential_fit_rejects_non_positive_values() {
        let result = exp_fit_log_linear(&[0.0, 1.0, 2.0], &[1.0, 0.0, 2.0]);
        assert!(matches!(result, Err(NumericError::Domain(_))));
    }
}
