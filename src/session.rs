//! The project being worked on.
//!
//! The record (with its progress map) is only ever changed three ways:
//! replaced wholesale after an edit, one progress entry flipped from the
//! checklist, or replaced by loading a saved project.

use crate::config::GurumiConfig;
use crate::error::AppError;
use crate::store::PatternStore;
use gurumi_core::traits::ResourceProvider;
use gurumi_core::{
    ChecklistHost, ChecklistSurface, PaginatedSurface, PatternDocument, PatternSurface, StepId,
    to_text,
};
use gurumi_render_lopdf::LopdfCanvas;
use gurumi_resource::FilesystemResourceProvider;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pattern: Option<PatternDocument>,
    picture: Option<Vec<u8>>,
    /// File stem of the saved project this session was loaded from.
    loaded_as: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(pattern: PatternDocument) -> Self {
        let mut session = Self::new();
        session.replace_pattern(pattern);
        session
    }

    pub fn pattern(&self) -> Option<&PatternDocument> {
        self.pattern.as_ref()
    }

    fn pattern_or_err(&self) -> Result<&PatternDocument, AppError> {
        self.pattern.as_ref().ok_or(AppError::NoPattern)
    }

    /// The character picture shown on the cover.
    pub fn picture(&self) -> Option<&[u8]> {
        self.picture.as_deref()
    }

    pub fn set_picture(&mut self, bytes: Option<Vec<u8>>) {
        self.picture = bytes;
    }

    /// Replaces the whole record, e.g. after the user edited its JSON.
    /// Progress for steps that no longer exist is dropped.
    pub fn replace_pattern(&mut self, mut pattern: PatternDocument) {
        pattern.retain_valid_progress();
        self.pattern = Some(pattern);
    }

    /// Replaces the record from edited JSON text. The current record is
    /// kept when the text does not parse.
    pub fn replace_from_json(&mut self, json: &str) -> Result<(), AppError> {
        let pattern = PatternDocument::from_json(json)?;
        self.replace_pattern(pattern);
        Ok(())
    }

    /// Flips one checklist entry and returns its new state.
    pub fn toggle(&mut self, id: StepId) -> Result<bool, AppError> {
        let pattern = self.pattern.as_mut().ok_or(AppError::NoPattern)?;
        if pattern.step(id).is_none() {
            return Err(AppError::UnknownStep(id.to_string()));
        }
        let checked = pattern.progress.toggle(id);
        log::debug!("Step {} is now {}", id, if checked { "done" } else { "open" });
        Ok(checked)
    }

    /// Replaces the record, its progress and picture with a saved project.
    /// Later saves write back to the same file.
    pub fn load(&mut self, store: &PatternStore, name: &str) -> Result<(), AppError> {
        let (pattern, picture_path) = store.load(name)?;
        self.picture = match picture_path {
            Some(path) => Some(std::fs::read(path)?),
            None => None,
        };
        self.replace_pattern(pattern);
        self.loaded_as = Some(name.strip_suffix(".json").unwrap_or(name).to_string());
        Ok(())
    }

    /// The saved project this session was loaded from, if any.
    pub fn loaded_as(&self) -> Option<&str> {
        self.loaded_as.as_deref()
    }

    /// Saves to the file the project was loaded from, or to a file named
    /// after the project for a new one.
    pub fn save(&self, store: &PatternStore) -> Result<PathBuf, AppError> {
        let pattern = self.pattern_or_err()?;
        let path = match &self.loaded_as {
            Some(name) => store.save_as(name, pattern, self.picture())?,
            None => store.save(pattern, self.picture())?,
        };
        Ok(path)
    }

    pub fn text(&self) -> Result<String, AppError> {
        Ok(to_text(self.pattern_or_err()?))
    }

    pub fn render_checklist<H: ChecklistHost>(&self, host: H) -> Result<H, AppError> {
        Ok(ChecklistSurface::new(host).render(self.pattern_or_err()?)?)
    }

    /// Renders the printable PDF with the configured page setup and logo.
    pub fn render_pdf(&self, config: &GurumiConfig) -> Result<Vec<u8>, AppError> {
        let pattern = self.pattern_or_err()?;
        let canvas = LopdfCanvas::new(config.document.page_size)
            .with_title(pattern.title_or(gurumi_core::model::FALLBACK_TITLE));
        let mut surface = PaginatedSurface::new(canvas, config.document.clone());

        if let Some((provider, key)) = config
            .logo_path
            .as_ref()
            .and_then(FilesystemResourceProvider::for_file)
        {
            if provider.exists(&key) {
                surface = surface.with_logo(&provider, &key);
            } else {
                log::debug!("No logo at {}", provider.root().join(&key).display());
            }
        }
        if let Some(bytes) = self.picture() {
            surface = surface.with_cover_bytes(bytes);
        }
        Ok(surface.render(pattern)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurumi_core::Component;

    fn session() -> Session {
        Session::with_pattern(PatternDocument {
            project_name: "Frog".into(),
            components: vec![Component::new("Head", vec!["Rnd 1: 6 sc".into()])],
            ..Default::default()
        })
    }

    #[test]
    fn toggling_flips_one_entry() {
        let mut session = session();
        let id = StepId::new(0, 0);
        assert!(session.toggle(id).unwrap());
        assert!(session.pattern().unwrap().progress.is_checked(id));
        assert!(!session.toggle(id).unwrap());
        assert!(matches!(
            session.toggle(StepId::new(3, 0)),
            Err(AppError::UnknownStep(_))
        ));
    }

    #[test]
    fn empty_session_reports_no_pattern() {
        let mut session = Session::new();
        assert!(matches!(session.text(), Err(AppError::NoPattern)));
        assert!(matches!(
            session.toggle(StepId::new(0, 0)),
            Err(AppError::NoPattern)
        ));
    }

    #[test]
    fn edits_replace_the_record_and_prune_progress() {
        let mut session = session();
        session.toggle(StepId::new(0, 0)).unwrap();
        session
            .replace_from_json(r#"{"project_name": "Toad", "progress": {"0_0": true, "4_4": true}, "components": [{"name": "Body", "steps": ["Ch 2"]}]}"#)
            .unwrap();
        let pattern = session.pattern().unwrap();
        assert_eq!(pattern.project_name, "Toad");
        assert_eq!(pattern.progress.len(), 1);

        assert!(session.replace_from_json("not json").is_err());
        assert_eq!(session.pattern().unwrap().project_name, "Toad");
    }
}
