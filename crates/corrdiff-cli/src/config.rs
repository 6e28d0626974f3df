mod defaults;

use crate::cli::{AnalyzeArgs, InputFormat};
use crate::error::{CliError, Result};
use clap::ValueEnum;
use corrdiff::core::io::colvars::field_span;
use corrdiff::core::numerics::integration::IntegrationCutoff;
use corrdiff::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Contents of the optional TOML configuration file. Every key may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialAnalysisConfig {
    timeseries: Option<PathBuf>,
    acf: Option<PathBuf>,
    timestep: Option<f64>,
    maxcorr: Option<usize>,
    field: Option<u8>,
    format: Option<InputFormat>,
    integration_cutoff: Option<IntegrationCutoff>,
}

/// Fully resolved settings of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub timeseries: PathBuf,
    pub acf: Option<PathBuf>,
    pub field: u8,
    pub format: InputFormat,
    pub analysis: AnalysisConfig,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty configuration.
    pub fn load(args: &AnalyzeArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final configuration. Command-line flags win over `--set` values,
    /// which win over the file, which wins over the built-in defaults.
    pub fn merge_with_cli(mut self, args: &AnalyzeArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let timeseries = args
            .timeseries
            .clone()
            .or(self.timeseries)
            .ok_or_else(|| {
                CliError::Config(
                    "A value for 'timeseries' is required either in the config file or via CLI argument."
                        .to_string(),
                )
            })?;

        let field = args.field.or(self.field).unwrap_or(defaults.field);
        if field_span(field).is_none() {
            return Err(CliError::Argument(format!(
                "field must be 1, 2 or 3, got {}",
                field
            )));
        }

        let integration_cutoff = args
            .integration_cutoff
            .map(|fraction| IntegrationCutoff { fraction })
            .or(self.integration_cutoff);

        let analysis = AnalysisConfigBuilder::new()
            .timestep(args.timestep.or(self.timestep).unwrap_or(defaults.timestep))
            .max_lag(args.maxcorr.or(self.maxcorr).unwrap_or(defaults.maxcorr))
            .integration_cutoff(integration_cutoff)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            timeseries,
            acf: args.acf.clone().or(self.acf),
            field,
            format: args.format.or(self.format).unwrap_or(defaults.format),
            analysis,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "timeseries" => self.timeseries = Some(PathBuf::from(value_str)),
                "acf" => self.acf = Some(PathBuf::from(value_str)),
                "timestep" => self.timestep = Some(parse_value(key, value_str)?),
                "maxcorr" => self.maxcorr = Some(parse_value(key, value_str)?),
                "field" => self.field = Some(parse_value(key, value_str)?),
                "format" => {
                    self.format = Some(InputFormat::from_str(value_str, true).map_err(|e| {
                        CliError::Config(format!("Invalid value for {}: {}", key, e))
                    })?);
                }
                "integration-cutoff" => {
                    self.integration_cutoff = Some(IntegrationCutoff {
                        fraction: parse_value(key, value_str)?,
                    });
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid value for {}: {}", key, value_str))
    })
}
