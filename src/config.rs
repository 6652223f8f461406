//! Application configuration.
//!
//! A [`GurumiConfig`] is built once (defaults, a JSON file, the builder, or
//! `GURUMI_*` environment variables) and handed to the store and session at
//! construction. Nothing reads the environment after that.

use crate::error::AppError;
use gurumi_core::DocumentSettings;
use gurumi_core::style::parsers::parse_margins;
use gurumi_core::style::PageSize;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_SAVE_DIR: &str = "GURUMI_SAVE_DIR";
pub const ENV_LOGO: &str = "GURUMI_LOGO";
pub const ENV_PAGE_SIZE: &str = "GURUMI_PAGE_SIZE";
pub const ENV_MARGINS: &str = "GURUMI_MARGINS";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GurumiConfig {
    /// Directory saved projects are written to.
    pub save_dir: PathBuf,
    /// Logo drawn on the cover page. Skipped when the file is missing.
    pub logo_path: Option<PathBuf>,
    pub document: DocumentSettings,
}

impl Default for GurumiConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("inventory"),
            logo_path: Some(PathBuf::from("logo.png")),
            document: DocumentSettings::default(),
        }
    }
}

impl GurumiConfig {
    pub fn builder() -> GurumiConfigBuilder {
        GurumiConfigBuilder::default()
    }

    /// Reads a JSON configuration file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| AppError::Config(format!("Invalid config '{}': {}", path.display(), e)))
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `GURUMI_*` overrides looked up through `lookup`.
    ///
    /// An empty `GURUMI_LOGO` disables the logo.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_SAVE_DIR).filter(|v| !v.trim().is_empty()) {
            self.save_dir = PathBuf::from(dir);
        }
        if let Some(logo) = lookup(ENV_LOGO) {
            self.logo_path = Some(PathBuf::from(logo)).filter(|p| !p.as_os_str().is_empty());
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            self.document.page_size = serde_json::from_value::<PageSize>(size.clone().into())
                .map_err(|_| AppError::Config(format!("{}: unknown page size '{}'", ENV_PAGE_SIZE, size)))?;
        }
        if let Some(margins) = lookup(ENV_MARGINS) {
            self.document.margins = parse_margins(&margins)
                .map_err(|e| AppError::Config(format!("{}: {}", ENV_MARGINS, e)))?;
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GurumiConfigBuilder {
    config: GurumiConfig,
}

impl GurumiConfigBuilder {
    pub fn save_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.save_dir = dir.into();
        self
    }

    pub fn logo_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.logo_path = Some(path.into());
        self
    }

    pub fn without_logo(mut self) -> Self {
        self.config.logo_path = None;
        self
    }

    pub fn page_size(mut self, size: PageSize) -> Self {
        self.config.document.page_size = size;
        self
    }

    /// Margin shorthand such as `"10mm 10mm 15mm 10mm"`.
    pub fn margins(mut self, shorthand: &str) -> Result<Self, AppError> {
        self.config.document.margins =
            parse_margins(shorthand).map_err(|e| AppError::Config(e.to_string()))?;
        Ok(self)
    }

    pub fn scratch_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.document.scratch_dir = Some(dir.into());
        self
    }

    pub fn document(mut self, document: DocumentSettings) -> Self {
        self.config.document = document;
        self
    }

    pub fn build(self) -> GurumiConfig {
        self.config
    }
}
