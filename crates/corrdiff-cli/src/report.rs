use corrdiff::core::units::reference_variances;
use corrdiff::engine::config::AnalysisConfig;
use corrdiff::engine::state::DiffusionReport;
use std::io::{self, Write};

/// Prints the `#`-prefixed summary of an analysis.
pub fn write_report<W: Write>(
    writer: &mut W,
    config: &AnalysisConfig,
    report: &DiffusionReport,
) -> io::Result<()> {
    let reference = reference_variances();
    let correlations = &report.correlations;

    writeln!(writer, "# timestep = {} fs", config.timestep)?;
    writeln!(
        writer,
        "# reference var = {:e} A^2, varVel = {:e} (A/fs)^2",
        reference.position, reference.velocity
    )?;
    writeln!(
        writer,
        "# samples = {} (analysed {}, mean {:e})",
        report.num_samples,
        report.preprocessed.len(),
        report.preprocessed.mean
    )?;
    writeln!(writer, "# var = {:e} A^2", correlations.var)?;
    writeln!(writer, "# varVel = {:e} (A/fs)^2", correlations.var_vel)?;
    writeln!(writer, "# nCorr = {}", correlations.max_lag())?;
    writeln!(
        writer,
        "# s_min = {:e} 1/fs (f = {:e}, {} iterations)",
        report.minimum.s_min, report.minimum.value, report.minimum.iterations
    )?;
    writeln!(writer, "# I = {:e} A^2 fs", report.direct.integral)?;
    writeln!(writer, "# D = {:e} A^2/fs", report.direct.diffusion)?;
    writeln!(writer, "# D = {:e} cm^2/s", report.direct.diffusion_cm2_per_s())?;
    writeln!(
        writer,
        "# D_limit = {:e} A^2/fs = {:e} cm^2/s (slope {:e})",
        report.sweep.d_limit(),
        report.sweep.d_limit_cm2_per_s(),
        report.sweep.linear.slope
    )?;
    if let Some(exponential) = &report.sweep.exponential {
        writeln!(
            writer,
            "# D_exp = {:e} A^2/fs (rate {:e} fs)",
            exponential.amplitude, exponential.rate
        )?;
    }
    Ok(())
}
