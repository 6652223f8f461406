//! Errors for loading, interpreting and rendering patterns.

use gurumi_render_core::RenderError;
use gurumi_style::StyleParseError;
use gurumi_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
    #[error("Style error: {0}")]
    Style(#[from] StyleParseError),
    #[error("Image error: {0}")]
    Image(String),
    #[error("Other pipeline error: {0}")]
    Other(String),
}

impl From<image::ImageError> for PipelineError {
    fn from(e: image::ImageError) -> Self {
        PipelineError::Image(e.to_string())
    }
}
