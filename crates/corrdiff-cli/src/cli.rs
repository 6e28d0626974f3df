use clap::{Args, Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "corrdiff - diffusion coefficients of harmonically restrained coordinates from position and velocity autocorrelation functions (Hummer 2005).",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Input trajectory layouts understood by the analysis.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// Fixed-width NAMD colvars trajectory (`colvars.traj`).
    #[default]
    Colvars,
    /// One value per line; the first whitespace-separated token is used.
    Raw,
}

/// Arguments of the analysis.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    // --- Input and Output ---
    /// Path to the coordinate time series.
    #[arg(short = 't', long, value_name = "PATH")]
    pub timeseries: Option<PathBuf>,

    /// Write the position and velocity autocorrelation functions to this file.
    #[arg(short = 'a', long, value_name = "PATH")]
    pub acf: Option<PathBuf>,

    /// Layout of the time series file.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Column of a colvars trajectory to analyse (1, 2 or 3).
    #[arg(short = 'f', long, value_name = "INT")]
    pub field: Option<u8>,

    // --- Analysis Parameters ---
    /// Sampling interval of the time series in fs.
    #[arg(short = 's', long, value_name = "FLOAT")]
    pub timestep: Option<f64>,

    /// Number of lags of the correlation functions.
    #[arg(short = 'm', long, value_name = "INT")]
    pub maxcorr: Option<usize>,

    /// Stop integrating the position ACF once it falls below C(0)^2 * FRACTION.
    #[arg(long, value_name = "FRACTION")]
    pub integration_cutoff: Option<f64>,

    // --- Configuration ---
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S maxcorr=500
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_flags_map_to_analysis_arguments() {
        let cli = Cli::parse_from([
            "corrdiff", "-t", "colvars.traj", "-a", "acf.dat", "-s", "2", "-m", "500", "-f", "3",
        ]);
        let args = cli.analyze;
        assert_eq!(args.timeseries, Some(PathBuf::from("colvars.traj")));
        assert_eq!(args.acf, Some(PathBuf::from("acf.dat")));
        assert_eq!(args.timestep, Some(2.0));
        assert_eq!(args.maxcorr, Some(500));
        assert_eq!(args.field, Some(3));
        assert_eq!(args.format, None);
    }

    #[test]
    fn format_and_overrides_are_parsed() {
        let cli = Cli::parse_from([
            "corrdiff",
            "--format",
            "raw",
            "-S",
            "timestep=0.5",
            "-S",
            "field=2",
            "-vv",
        ]);
        assert_eq!(cli.analyze.format, Some(InputFormat::Raw));
        assert_eq!(cli.analyze.set_values, vec!["timestep=0.5", "field=2"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["corrdiff", "-q", "-v"]).is_err());
    }
}
