use serde::Deserialize;

/// Fraction of `C[0]^2` used as the default early-termination threshold.
pub const DEFAULT_CUTOFF_FRACTION: f64 = 0.05;

/// Optional early termination of the trapezoidal sum.
///
/// When enabled, integration stops at the first lag whose correlation value falls
/// below `C[0]^2 * fraction`, suppressing the noisy long-lag tail.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationCutoff {
    pub fraction: f64,
}

impl IntegrationCutoff {
    pub fn threshold(&self, acf: &[f64]) -> Option<f64> {
        acf.first().map(|c0| c0 * c0 * self.fraction)
    }
}

impl Default for IntegrationCutoff {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_CUTOFF_FRACTION,
        }
    }
}

/// Integrates a correlation function over lag time with the trapezoidal rule.
///
/// `I = Σ_{k=0}^{n-2} 0.5 * (C[k] + C[k+1]) * timestep`. Arrays with fewer than two
/// entries integrate to zero.
#[inline]
pub fn integrate_corr(acf: &[f64], timestep: f64) -> f64 {
    integrate_corr_with_cutoff(acf, timestep, None)
}

/// Trapezoidal integration with an optional [`IntegrationCutoff`].
pub fn integrate_corr_with_cutoff(
    acf: &[f64],
    timestep: f64,
    cutoff: Option<IntegrationCutoff>,
) -> f64 {
    let threshold = cutoff
        .and_then(|c| c.threshold(acf))
        .unwrap_or(f64::NEG_INFINITY);

    acf.windows(2)
        .take_while(|pair| pair[0] >= threshold)
        .map(|pair| 0.5 * (pair[0] + pair[1]) * timestep)
        .sum()
}
