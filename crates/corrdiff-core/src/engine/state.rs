use crate::core::numerics::regression::{ExponentialFit, LinearFit};
use crate::core::units::diffusion_to_cm2_per_s;
use std::fmt;

/// Stages of one analysis run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnalysisStage {
    Loaded,
    Preprocessed,
    CorrelatedBoth,
    IntegratedDirect,
    MinimumLocated,
    SweptAndRegressed,
    Reported,
}

impl AnalysisStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Loaded => "Loading",
            Self::Preprocessed => "Preprocessing",
            Self::CorrelatedBoth => "Correlation",
            Self::IntegratedDirect => "Direct integration",
            Self::MinimumLocated => "Minimum search",
            Self::SweptAndRegressed => "Frequency sweep",
            Self::Reported => "Report",
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Centered position series and its velocity series, equal in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed {
    /// Mean that was removed from the raw series.
    pub mean: f64,
    pub positions: Vec<f64>,
    pub velocities: Vec<f64>,
}

impl Preprocessed {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Correlations {
    pub acf: Vec<f64>,
    pub vacf: Vec<f64>,
    /// Position variance, Å².
    pub var: f64,
    /// Velocity variance, (Å/fs)².
    pub var_vel: f64,
}

impl Correlations {
    pub fn max_lag(&self) -> usize {
        self.acf.len()
    }
}

/// `D = var² / I` from the time integral of the position ACF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectEstimate {
    /// Integral of the position ACF, Å²·fs.
    pub integral: f64,
    /// Diffusion coefficient, Å²/fs.
    pub diffusion: f64,
}

impl DirectEstimate {
    pub fn diffusion_cm2_per_s(&self) -> f64 {
        diffusion_to_cm2_per_s(self.diffusion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumSearch {
    /// Transform variable at the minimum of the characteristic function, 1/fs.
    pub s_min: f64,
    /// Characteristic function at `s_min`.
    pub value: f64,
    pub iterations: u64,
}

/// `D(s)` samples over the sweep and their extrapolation to `s -> 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub s_values: Vec<f64>,
    pub diffusion: Vec<f64>,
    pub linear: LinearFit,
    /// Only available when every `D(s)` is positive.
    pub exponential: Option<ExponentialFit>,
}

impl SweepResult {
    /// Limiting diffusion coefficient, the intercept of the linear fit, Å²/fs.
    pub fn d_limit(&self) -> f64 {
        self.linear.intercept
    }

    pub fn d_limit_cm2_per_s(&self) -> f64 {
        diffusion_to_cm2_per_s(self.d_limit())
    }
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionReport {
    /// Samples in the input series, before preprocessing.
    pub num_samples: usize,
    pub preprocessed: Preprocessed,
    pub correlations: Correlations,
    pub direct: DirectEstimate,
    pub minimum: MinimumSearch,
    pub sweep: SweepResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered_like_the_pipeline() {
        assert!(AnalysisStage::Loaded < AnalysisStage::Preprocessed);
        assert!(AnalysisStage::MinimumLocated < AnalysisStage::SweptAndRegressed);
        assert_eq!(AnalysisStage::CorrelatedBoth.to_string(), "Correlation");
    }

    #[test]
    fn sweep_limit_is_linear_intercept() {
        let sweep = SweepResult {
            s_values: vec![1.0, 2.0],
            diffusion: vec![3.0, 4.0],
            linear: LinearFit {
                slope: 1.0,
                intercept: 2.0,
            },
            exponential: None,
        };
        assert_eq!(sweep.d_limit(), 2.0);
        assert!((sweep.d_limit_cm2_per_s() - 0.2).abs() < 1e-15);
    }
}
