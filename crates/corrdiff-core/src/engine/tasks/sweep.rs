use crate::core::numerics::NumericError;
use crate::core::numerics::regression::{exp_fit_log_linear, least_squares_line};
use crate::engine::config::{SweepConfig, SweepStep};
use crate::engine::context::FrequencyContext;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::SweepResult;
use tracing::{debug, info, warn};

const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Transform variables of the sweep over `[s_min, upper_factor * s_min]`.
///
/// Points are generated by index rather than by accumulating the step, so the last
/// point of a relative sweep is exactly the upper end.
pub fn sweep_points(s_min: f64, sweep: &SweepConfig) -> Result<Vec<f64>, NumericError> {
    if !(s_min.is_finite() && s_min > 0.0) {
        return Err(NumericError::InvalidInput(format!(
            "sweep start must be positive, got {}",
            s_min
        )));
    }
    let span = (sweep.upper_factor - 1.0) * s_min;

    let (count, step) = match sweep.step {
        SweepStep::Relative { points } if points < 2 => {
            return Err(NumericError::InvalidInput(format!(
                "a relative sweep needs at least 2 points, got {}",
                points
            )));
        }
        SweepStep::Relative { points } => (points, span / (points - 1) as f64),
        SweepStep::Absolute { step } => {
            let intervals = (span / step).floor();
            if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
                return Err(NumericError::InvalidInput(format!(
                    "absolute step {} over a span of {} gives too many points",
                    step, span
                )));
            }
            (intervals as usize + 1, step)
        }
    };

    Ok((0..count).map(|i| s_min + i as f64 * step).collect())
}

/// Evaluates `D(s)` across the sweep and extrapolates it to `s -> 0`.
///
/// The linear fit is required; the exponential fit is attempted only when every
/// `D(s)` is positive and is otherwise skipped with a warning.
pub fn run(
    context: &FrequencyContext<'_>,
    s_min: f64,
    sweep: &SweepConfig,
    reporter: &ProgressReporter,
) -> Result<SweepResult, NumericError> {
    let s_values = sweep_points(s_min, sweep)?;
    info!(
        "Sweeping {} transform values over [{:e}, {:e}].",
        s_values.len(),
        s_min,
        sweep.upper_factor * s_min
    );

    reporter.report(Progress::TaskStart {
        total_steps: s_values.len() as u64,
    });
    let mut diffusion = Vec::with_capacity(s_values.len());
    for &s in &s_values {
        let d = context.diffusion_at(s)?;
        debug!("s = {:e}, D(s) = {:e}", s, d);
        diffusion.push(d);
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    let linear = least_squares_line(&s_values, &diffusion)?;

    let exponential = if diffusion.iter().all(|&d| d > 0.0) {
        Some(exp_fit_log_linear(&s_values, &diffusion)?)
    } else {
        warn!("D(s) is not positive across the sweep; skipping the exponential extrapolation.");
        None
    };

    Ok(SweepResult {
        s_values,
        diffusion,
        linear,
        exponential,
    })
}
