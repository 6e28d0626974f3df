use crate::cli::{AnalyzeArgs, InputFormat};
use crate::config::{AppConfig, PartialAnalysisConfig};
use crate::error::{CliError, Result};
use crate::report::write_report;
use crate::utils::progress::CliProgressHandler;
use corrdiff::{
    core::io::{
        acf::write_correlations_to_path,
        colvars::{ColvarsFile, ColvarsOptions},
        raw::RawFile,
        traits::{SeriesError, SeriesFile, SeriesMetadata},
    },
    engine::progress::ProgressReporter,
    workflows,
};
use std::io;
use tracing::{info, warn};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let partial_config = PartialAnalysisConfig::load(&args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    info!(
        "Loading {:?} time series from {:?}",
        config.format, &config.timeseries
    );
    let (series, metadata) = read_series(&config).map_err(|e| CliError::FileParsing {
        path: config.timeseries.clone(),
        source: e.into(),
    })?;
    if let Some(line) = metadata.truncated_at {
        warn!(
            "Malformed record on line {} of {:?}; using the {} samples before it.",
            line,
            &config.timeseries,
            series.len()
        );
    }
    info!(
        "Read {} samples ({} comment lines skipped).",
        series.len(),
        metadata.comment_lines
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = workflows::analyze::run(&series, &config.analysis, &reporter)?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &config.analysis, &report)?;

    if let Some(acf_path) = &config.acf {
        info!("Writing correlation functions to {:?}", acf_path);
        write_correlations_to_path(
            acf_path,
            &report.correlations.acf,
            &report.correlations.vacf,
        )
        .map_err(|e| CliError::FileParsing {
            path: acf_path.clone(),
            source: e.into(),
        })?;
    }

    Ok(())
}

fn read_series(config: &AppConfig) -> std::result::Result<(Vec<f64>, SeriesMetadata), SeriesError> {
    match config.format {
        InputFormat::Colvars => ColvarsFile::read_from_path(
            &config.timeseries,
            &ColvarsOptions {
                field: config.field,
            },
        ),
        InputFormat::Raw => RawFile::read_from_path(&config.timeseries, &()),
    }
}
