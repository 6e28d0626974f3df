//! Preprocessing of raw coordinate series: mean removal, finite-difference
//! velocities and variances.

use crate::core::numerics::NumericError;

/// Subtracts the arithmetic mean from every sample in place and returns the mean.
///
/// # Errors
///
/// Returns [`NumericError::InvalidInput`] for an empty series.
pub fn subtract_average(series: &mut [f64]) -> Result<f64, NumericError> {
    if series.is_empty() {
        return Err(NumericError::InvalidInput(
            "cannot center an empty series".into(),
        ));
    }
    let average = series.iter().sum::<f64>() / series.len() as f64;
    series.iter_mut().for_each(|y| *y -= average);
    Ok(average)
}

/// Derives a mean-centered velocity series by central finite differences.
///
/// `v[i] = (y[i+2] - y[i]) / (2 * timestep)`, i.e. the velocity at every interior
/// sample. The two endpoints are dropped, so the result has `N - 2` samples.
///
/// # Errors
///
/// Returns [`NumericError::InvalidInput`] if the series has fewer than three samples
/// or the timestep is not a positive finite number.
pub fn velocity_series(series: &[f64], timestep: f64) -> Result<Vec<f64>, NumericError> {
    if !(timestep.is_finite() && timestep > 0.0) {
        return Err(NumericError::InvalidInput(format!(
            "timestep must be positive and finite, got {}",
            timestep
        )));
    }
    if series.len() < 3 {
        return Err(NumericError::InvalidInput(format!(
            "velocity series requires at least 3 samples, got {}",
            series.len()
        )));
    }

    let mut velocities: Vec<f64> = series
        .windows(3)
        .map(|w| (w[2] - w[0]) / (2.0 * timestep))
        .collect();
    subtract_average(&mut velocities)?;
    Ok(velocities)
}

/// Mean square `Σy² / N` of an already centered series.
pub fn variance(series: &[f64]) -> Result<f64, NumericError> {
    if series.is_empty() {
        return Err(NumericError::InvalidInput(
            "variance of an empty series is undefined".into(),
        ));
    }
    Ok(series.iter().map(|y| y * y).sum::<f64>() / series.len() as f64)
}
