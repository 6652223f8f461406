//! The on-disk inventory of saved projects.
//!
//! Each project is a pretty-printed JSON record `{safe_name}.json` with an
//! optional `{safe_name}.png` picture next to it.

use gurumi_core::PatternDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const UNNAMED: &str = "Unnamed Project";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid pattern record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No saved project named '{0}'")]
    NotFound(String),

    #[error("Not a valid project file name: '{0}'")]
    InvalidName(String),
}

/// File-name form of a project name: alphanumerics and spaces only,
/// trimmed, spaces replaced by `_`.
pub fn safe_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// One entry of [`PatternStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPattern {
    /// The file stem, used to load the project again.
    pub name: String,
    pub title: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PatternStore {
    dir: PathBuf,
}

impl PatternStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// Writes `pattern` and, when given, its picture as PNG. Returns the path
    /// of the JSON record.
    ///
    /// Progress entries that do not address a step are dropped before
    /// writing. A picture that cannot be decoded is skipped with a warning.
    pub fn save(
        &self,
        pattern: &PatternDocument,
        picture: Option<&[u8]>,
    ) -> Result<PathBuf, StoreError> {
        let mut stem = safe_name(&pattern.project_name);
        if stem.is_empty() {
            stem = safe_name(UNNAMED);
        }
        self.save_as(&stem, pattern, picture)
    }

    /// Like [`save`](Self::save), but under the file stem `name` instead of
    /// one derived from the project name. Used to write a loaded project
    /// back to the file it came from.
    pub fn save_as(
        &self,
        name: &str,
        pattern: &PatternDocument,
        picture: Option<&[u8]>,
    ) -> Result<PathBuf, StoreError> {
        let stem = name.strip_suffix(".json").unwrap_or(name);
        if !is_plain_stem(stem) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        self.ensure_dir()?;

        let mut record = pattern.clone();
        record.retain_valid_progress();
        let json_path = self.dir.join(format!("{}.json", stem));
        fs::write(&json_path, record.to_json_pretty()?)?;

        if let Some(bytes) = picture {
            let png_path = self.dir.join(format!("{}.png", stem));
            let saved = image::load_from_memory(bytes)
                .and_then(|img| img.save_with_format(&png_path, image::ImageFormat::Png));
            if let Err(e) = saved {
                log::warn!("Saved '{}' without its picture: {}", stem, e);
            }
        }
        log::info!("Saved project to {}", json_path.display());
        Ok(json_path)
    }

    /// Saved projects sorted by file name. Unreadable records are skipped.
    pub fn list(&self) -> Result<Vec<SavedPattern>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut saved = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match read_record(&path) {
                Ok(pattern) => saved.push(SavedPattern {
                    name: name.to_string(),
                    title: pattern.title_or(UNNAMED).to_string(),
                    path: path.clone(),
                }),
                Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
            }
        }
        Ok(saved)
    }

    /// Loads a project by file stem (or file name), with the path of its
    /// picture when one was saved.
    pub fn load(&self, name: &str) -> Result<(PatternDocument, Option<PathBuf>), StoreError> {
        let stem = name.strip_suffix(".json").unwrap_or(name);
        let json_path = self.dir.join(format!("{}.json", stem));
        if !is_plain_stem(stem) || !json_path.is_file() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        let pattern = read_record(&json_path)?;
        let png_path = self.dir.join(format!("{}.png", stem));
        let picture = png_path.is_file().then_some(png_path);
        Ok((pattern, picture))
    }
}

/// A bare file stem: non-empty, no path separators, not `.` or `..`.
fn is_plain_stem(stem: &str) -> bool {
    !stem.is_empty() && !stem.contains(['/', '\\']) && stem != "." && stem != ".."
}

fn read_record(path: &Path) -> Result<PatternDocument, StoreError> {
    Ok(PatternDocument::from_json(&fs::read_to_string(path)?)?)
}
