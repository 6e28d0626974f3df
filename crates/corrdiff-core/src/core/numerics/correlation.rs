use super::NumericError;

/// Computes the lag-truncated autocorrelation function of a series.
///
/// Uses the direct `O(N * max_lag)` estimator (Allen & Tildesley): every product
/// `y[i] * y[j]` with `0 <= j - i < max_lag` is accumulated into bucket `j - i`,
/// and bucket `k` is then divided by the number of pairs at that lag, `N - k`.
/// No mean is removed here; callers are expected to center the series first.
///
/// # Arguments
///
/// * `y` - The (usually mean-centered) series.
/// * `max_lag` - Number of lags to compute; the result has exactly this length.
///
/// # Errors
///
/// Returns [`NumericError::InvalidInput`] if `max_lag` exceeds the number of samples.
pub fn calc_correlation(y: &[f64], max_lag: usize) -> Result<Vec<f64>, NumericError> {
    let n = y.len();
    if max_lag > n {
        return Err(NumericError::InvalidInput(format!(
            "maximum lag {} exceeds the number of samples {}",
            max_lag, n
        )));
    }

    let mut corr = vec![0.0; max_lag];
    for (i, &yi) in y.iter().enumerate() {
        let end = n.min(i + max_lag);
        for (lag, &yj) in y[i..end].iter().enumerate() {
            corr[lag] += yi * yj;
        }
    }

    for (lag, c) in corr.iter_mut().enumerate() {
        *c /= (n - lag) as f64;
    }

    Ok(corr)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn oscillation(periods: usize) -> Vec<f64> {
        [0.0, 1.0, 2.0, 1.0, 0.0, -1.0, -2.0, -1.0].repeat(periods)
    }

    #[test]
    fn zero_lag_entry_equals_mean_square() {
        let y = [0.3, -1.2, 2.5, 0.7, -0.4, 1.1];
        let corr = calc_correlation(&y, 3).unwrap();
        let mean_square = y.iter().map(|v| v * v).sum::<f64>() / y.len() as f64;
        assert!(f64_approx_equal(corr[0], mean_square));
    }

    #[test]
    fn output_length_matches_requested_lags() {
        let y = oscillation(2);
        for max_lag in [0, 1, 5, y.len()] {
            assert_eq!(calc_correlation(&y, max_lag).unwrap().len(), max_lag);
        }
    }

    #[test]
    fn oscillation_produces_golden_correlation() {
        let y = oscillation(2);
        let corr = calc_correlation(&y, 5).unwrap();
        let expected = [
            24.0 / 16.0,
            16.0 / 15.0,
            1.0 / 14.0,
            -12.0 / 13.0,
            -18.0 / 12.0,
        ];
        for (got, want) in corr.iter().zip(expected) {
            assert!(f64_approx_equal(*got, want), "got {got}, want {want}");
        }
    }

    #[test]
    fn constant_offset_left_in_the_input_changes_every_entry() {
        let centered = oscillation(2);
        let shifted: Vec<f64> = centered.iter().map(|v| v + 3.0).collect();
        let a = calc_correlation(&centered, 4).unwrap();
        let b = calc_correlation(&shifted, 4).unwrap();
        assert!(f64_approx_equal(b[0], a[0] + 9.0));
        for (x, y) in a.iter().zip(&b) {
            assert!(!f64_approx_equal(*x, *y));
        }
    }

    #[test]
    fn max_lag_equal_to_length_uses_single_pair_at_last_lag() {
        let y = [1.0, 2.0, 3.0];
        let corr = calc_correlation(&y, 3).unwrap();
        assert!(f64_approx_equal(corr[2], 3.0));
        assert!(f64_approx_equal(corr[1], (2.0 + 6.0) / 2.0));
    }

    #[test]
    fn max_lag_beyond_sample_count_is_rejected() {
        let result = calc_correlation(&[1.0, 2.0], 3);
        assert!(matches!(result, Err(NumericError::InvalidInput(_))));
    }
}
