use super::config::ConfigError;
use super::state::AnalysisStage;
use crate::core::numerics::NumericError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid analysis configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: AnalysisStage,
        #[source]
        source: NumericError,
    },
}

impl EngineError {
    /// Wraps a numeric failure with the stage it happened in, for use with `map_err`.
    pub fn in_stage(stage: AnalysisStage) -> impl FnOnce(NumericError) -> Self {
        move |source| Self::Stage { stage, source }
    }

    pub fn numeric_source(&self) -> Option<&NumericError> {
        match self {
            Self::Stage { source, .. } => Some(source),
            Self::Config(_) => None,
        }
    }
}
