use crate::core::numerics::integration::IntegrationCutoff;
use crate::core::numerics::minimize::{
    DEFAULT_PRECISION_BITS, DEFAULT_S_LOWER, DEFAULT_S_UPPER,
};
use thiserror::Error;

pub const DEFAULT_SWEEP_UPPER_FACTOR: f64 = 5.0;
pub const DEFAULT_SWEEP_POINTS: usize = 100;
/// Step of the fixed-increment sweep, in 1/fs.
pub const ABSOLUTE_SWEEP_STEP: f64 = 1e-4;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Bracket and precision of the search for the characteristic-function minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub s_lower: f64,
    pub s_upper: f64,
    pub precision_bits: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            s_lower: DEFAULT_S_LOWER,
            s_upper: DEFAULT_S_UPPER,
            precision_bits: DEFAULT_PRECISION_BITS,
        }
    }
}

/// Spacing of the transform variables in the frequency sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepStep {
    /// `points` evenly spaced values spanning the whole sweep interval.
    Relative { points: usize },
    /// A fixed increment in 1/fs, independent of the size of `s_min`.
    Absolute { step: f64 },
}

impl Default for SweepStep {
    fn default() -> Self {
        SweepStep::Relative {
            points: DEFAULT_SWEEP_POINTS,
        }
    }
}

/// Sweep over `[s_min, upper_factor * s_min]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub upper_factor: f64,
    pub step: SweepStep,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            upper_factor: DEFAULT_SWEEP_UPPER_FACTOR,
            step: SweepStep::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Sampling interval of the series in fs.
    pub timestep: f64,
    /// Number of lags of the correlation functions.
    pub max_lag: usize,
    pub integration_cutoff: Option<IntegrationCutoff>,
    pub search: SearchConfig,
    pub sweep: SweepConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    timestep: Option<f64>,
    max_lag: Option<usize>,
    integration_cutoff: Option<IntegrationCutoff>,
    search: Option<SearchConfig>,
    sweep: Option<SweepConfig>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestep(mut self, timestep: f64) -> Self {
        self.timestep = Some(timestep);
        self
    }
    pub fn max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = Some(max_lag);
        self
    }
    pub fn integration_cutoff(mut self, cutoff: Option<IntegrationCutoff>) -> Self {
        self.integration_cutoff = cutoff;
        self
    }
    pub fn search(mut self, search: SearchConfig) -> Self {
        self.search = Some(search);
        self
    }
    pub fn sweep(mut self, sweep: SweepConfig) -> Self {
        self.sweep = Some(sweep);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let timestep = self
            .timestep
            .ok_or(ConfigError::MissingParameter("timestep"))?;
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(invalid("timestep", format!("must be positive, got {}", timestep)));
        }

        let max_lag = self
            .max_lag
            .ok_or(ConfigError::MissingParameter("max_lag"))?;
        if max_lag < 2 {
            return Err(invalid("max_lag", format!("must be at least 2, got {}", max_lag)));
        }

        if let Some(cutoff) = &self.integration_cutoff {
            if !(cutoff.fraction.is_finite() && cutoff.fraction > 0.0) {
                return Err(invalid(
                    "integration_cutoff",
                    format!("fraction must be positive, got {}", cutoff.fraction),
                ));
            }
        }

        let search = self.search.unwrap_or_default();
        if !(search.s_lower > 0.0 && search.s_lower < search.s_upper && search.s_upper.is_finite())
        {
            return Err(invalid(
                "search",
                format!(
                    "bracket [{}, {}] must satisfy 0 < lower < upper",
                    search.s_lower, search.s_upper
                ),
            ));
        }
        if search.precision_bits == 0 || search.precision_bits >= f64::MANTISSA_DIGITS {
            return Err(invalid(
                "search.precision_bits",
                format!("must be within 1..=52, got {}", search.precision_bits),
            ));
        }

        let sweep = self.sweep.unwrap_or_default();
        if !(sweep.upper_factor.is_finite() && sweep.upper_factor > 1.0) {
            return Err(invalid(
                "sweep.upper_factor",
                format!("must exceed 1, got {}", sweep.upper_factor),
            ));
        }
        match sweep.step {
            SweepStep::Relative { points } if points < 2 => {
                return Err(invalid(
                    "sweep.step",
                    format!("needs at least 2 points, got {}", points),
                ));
            }
            SweepStep::Absolute { step } if !(step.is_finite() && step > 0.0) => {
                return Err(invalid("sweep.step", format!("must be positive, got {}", step)));
            }
            _ => {}
        }

        Ok(AnalysisConfig {
            timestep,
            max_lag,
            integration_cutoff: self.integration_cutoff,
            search,
            sweep,
        })
    }
}

fn invalid(name: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidParameter { name, reason }
}
