//! Where pattern records come from.

use crate::error::PipelineError;
use gurumi_types::PatternDocument;
use std::path::{Path, PathBuf};

/// Supplies a structured pattern record.
///
/// The generative service that writes patterns is one implementation; the
/// JSON inventory files written by the store are another.
pub trait PatternSource {
    fn load(&self) -> Result<PatternDocument, PipelineError>;
}

#[derive(Debug, Clone)]
enum JsonInput {
    Text(String),
    File(PathBuf),
}

/// A pattern record held as JSON text or in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonPatternSource {
    input: JsonInput,
}

impl JsonPatternSource {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            input: JsonInput::Text(json.into()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: JsonInput::File(path.as_ref().to_path_buf()),
        }
    }
}

impl PatternSource for JsonPatternSource {
    fn load(&self) -> Result<PatternDocument, PipelineError> {
        let pattern = match &self.input {
            JsonInput::Text(json) => PatternDocument::from_json(json)?,
            JsonInput::File(path) => {
                log::debug!("Reading pattern from {}", path.display());
                PatternDocument::from_json(&std::fs::read_to_string(path)?)?
            }
        };
        Ok(pattern)
    }
}
