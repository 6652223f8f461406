use crate::store::StoreError;
use gurumi_core::PipelineError;
use thiserror::Error;

/// Errors surfaced by the application layer and the command line.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No pattern loaded")]
    NoPattern,

    #[error("No step {0} in this pattern")]
    UnknownStep(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Pipeline(PipelineError::Json(e))
    }
}

impl From<gurumi_core::RenderError> for AppError {
    fn from(e: gurumi_core::RenderError) -> Self {
        AppError::Pipeline(PipelineError::Render(e))
    }
}
