use crate::core::numerics::NumericError;
use crate::core::numerics::correlation::calc_correlation;
use crate::core::numerics::integration::{IntegrationCutoff, integrate_corr_with_cutoff};
use crate::core::series::{subtract_average, variance, velocity_series};
use crate::engine::config::AnalysisConfig;
use crate::engine::context::FrequencyContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{
    AnalysisStage, Correlations, DiffusionReport, DirectEstimate, Preprocessed,
};
use crate::engine::tasks;
use tracing::{debug, info, instrument};

const MIN_SAMPLES: usize = 3;

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    series: &[f64],
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<DiffusionReport, EngineError> {
    info!(
        "Starting analysis of {} samples (timestep = {} fs, max lag = {}).",
        series.len(),
        config.timestep,
        config.max_lag
    );

    // === Phase 1: Center the series and derive velocities ===
    let preprocessed = reporter.phase(AnalysisStage::Preprocessed.name(), || {
        preprocess(series, config.timestep)
            .map_err(EngineError::in_stage(AnalysisStage::Preprocessed))
    })?;

    // === Phase 2: Position and velocity autocorrelation ===
    let correlations = reporter.phase(AnalysisStage::CorrelatedBoth.name(), || {
        correlate(&preprocessed, config.max_lag)
            .map_err(EngineError::in_stage(AnalysisStage::CorrelatedBoth))
    })?;

    // === Phase 3: Direct estimate from the integrated position ACF ===
    let direct = reporter.phase(AnalysisStage::IntegratedDirect.name(), || {
        direct_estimate(&correlations, config.timestep, config.integration_cutoff)
            .map_err(EngineError::in_stage(AnalysisStage::IntegratedDirect))
    })?;
    reporter.report(Progress::Message(format!(
        "D = {:e} A^2/fs = {:e} cm^2/s",
        direct.diffusion,
        direct.diffusion_cm2_per_s()
    )));

    let context = FrequencyContext::new(
        &correlations.vacf,
        correlations.var,
        correlations.var_vel,
        config.timestep,
    );

    // === Phase 4: Minimum of the characteristic function ===
    let minimum = reporter.phase(AnalysisStage::MinimumLocated.name(), || {
        tasks::minimum::run(&context, &config.search)
            .map_err(EngineError::in_stage(AnalysisStage::MinimumLocated))
    })?;

    // === Phase 5: Sweep D(s) and extrapolate ===
    let sweep = reporter.phase(AnalysisStage::SweptAndRegressed.name(), || {
        tasks::sweep::run(&context, minimum.s_min, &config.sweep, reporter)
            .map_err(EngineError::in_stage(AnalysisStage::SweptAndRegressed))
    })?;
    info!(
        "Extrapolated D = {:e} A^2/fs = {:e} cm^2/s.",
        sweep.d_limit(),
        sweep.d_limit_cm2_per_s()
    );

    Ok(DiffusionReport {
        num_samples: series.len(),
        preprocessed,
        correlations,
        direct,
        minimum,
        sweep,
    })
}

/// Centers `series` and derives its velocity series.
///
/// The positions kept are the first `N - 2` centered samples so that both series
/// have the same length.
pub fn preprocess(series: &[f64], timestep: f64) -> Result<Preprocessed, NumericError> {
    if series.len() < MIN_SAMPLES {
        return Err(NumericError::InvalidInput(format!(
            "at least {} samples are required, got {}",
            MIN_SAMPLES,
            series.len()
        )));
    }

    let mut positions = series.to_vec();
    let mean = subtract_average(&mut positions)?;
    let velocities = velocity_series(&positions, timestep)?;
    positions.truncate(velocities.len());

    debug!(
        "Removed mean {:e}; {} position and velocity samples remain.",
        mean,
        positions.len()
    );
    Ok(Preprocessed {
        mean,
        positions,
        velocities,
    })
}

/// Computes the ACF and VACF up to `max_lag` along with both variances.
pub fn correlate(preprocessed: &Preprocessed, max_lag: usize) -> Result<Correlations, NumericError> {
    let acf = calc_correlation(&preprocessed.positions, max_lag)?;
    let vacf = calc_correlation(&preprocessed.velocities, max_lag)?;
    let var = variance(&preprocessed.positions)?;
    let var_vel = variance(&preprocessed.velocities)?;

    info!(
        "Variances: position = {:e} A^2, velocity = {:e} (A/fs)^2.",
        var, var_vel
    );
    Ok(Correlations {
        acf,
        vacf,
        var,
        var_vel,
    })
}

/// `D = var² / I`, with `I` the trapezoidal integral of the position ACF.
pub fn direct_estimate(
    correlations: &Correlations,
    timestep: f64,
    cutoff: Option<IntegrationCutoff>,
) -> Result<DirectEstimate, NumericError> {
    let integral = integrate_corr_with_cutoff(&correlations.acf, timestep, cutoff);
    if integral == 0.0 {
        return Err(NumericError::DegenerateInput(
            "integral of the position ACF is zero".into(),
        ));
    }
    let diffusion = correlations.var * correlations.var / integral;
    info!(
        "ACF integral I = {:e} A^2 fs; D = {:e} A^2/fs.",
        integral, diffusion
    );
    Ok(DirectEstimate {
        integral,
        diffusion,
    })
}
