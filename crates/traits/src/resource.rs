//! Where renderers get image bytes (logo, cover pictures) from.
//!
//! Renderers only ever see a [`ResourceProvider`], so the same surface can be
//! fed from disk, from an upload held in memory, or from a test fixture.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{key}': {message}")]
    LoadFailed { key: String, message: String },

    #[error("Resource key '{0}' escapes the resource root")]
    OutsideRoot(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

pub type SharedResourceData = Arc<Vec<u8>>;

/// Loads resource bytes by key.
pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, key: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, key: &str) -> bool;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Loads `key`, logging and swallowing any failure.
    ///
    /// Renderers use this for optional decorations whose absence must never
    /// fail a document.
    fn load_optional(&self, key: &str) -> Option<SharedResourceData> {
        match self.load(key) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("{}: skipping resource: {}", self.name(), e);
                None
            }
        }
    }
}

/// Resources held in memory, keyed by an arbitrary string.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    entries: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(self, key: impl Into<String>, data: Vec<u8>) -> Self {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), Arc::new(data));
        }
        self
    }

    pub fn insert(&self, key: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let key = key.into();
        let mut entries = self.entries.write().map_err(|_| ResourceError::LoadFailed {
            key: key.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        entries.insert(key, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, key: &str) -> Result<SharedResourceData, ResourceError> {
        let entries = self.entries.read().map_err(|_| ResourceError::LoadFailed {
            key: key.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(key.to_string()))
    }

    fn exists(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|e| e.contains_key(key))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
