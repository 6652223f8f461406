//! The interactive surface: a checkbox per step with round counters.

use crate::error::PipelineError;
use crate::surface::PatternSurface;
use gurumi_render_core::ChecklistHost;
use gurumi_text::round_counter;
use gurumi_types::{Color, HybridSuggestion, PatternDocument};
use itertools::Itertools;

const THINGIVERSE_SEARCH: &str = "https://www.thingiverse.com/search";

/// Thingiverse search for printable parts matching `term`.
pub fn thingiverse_search_url(term: &str) -> String {
    let query: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
    format!(
        "{}?q={}&type=things&sort=relevant",
        THINGIVERSE_SEARCH, query
    )
}

/// Walks the structured record and drives a [`ChecklistHost`].
///
/// Checkbox state comes from the record's progress map; the surface never
/// writes it back. Hosts report flips to the session, which owns the record.
#[derive(Debug)]
pub struct ChecklistSurface<H: ChecklistHost> {
    host: H,
}

impl<H: ChecklistHost> ChecklistSurface<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    fn render_header(&mut self, pattern: &PatternDocument) -> Result<(), PipelineError> {
        self.host.title(pattern.display_name())?;
        self.host.info("Difficulty", &pattern.difficulty)?;
        self.host
            .info("Materials", &pattern.materials.iter().join(", "))?;
        if let Some(suggestion) = &pattern.hybrid_suggestion {
            self.render_suggestion(suggestion)?;
        }
        Ok(())
    }

    fn render_suggestion(&mut self, suggestion: &HybridSuggestion) -> Result<(), PipelineError> {
        self.host.begin_group("Hybrid Mode Suggestion", true)?;
        self.host.info("Part", &suggestion.kind)?;
        self.host.info("Info", &suggestion.description)?;
        let term = suggestion.search_term.trim();
        if !term.is_empty() {
            self.host
                .link("Find STL on Thingiverse", &thingiverse_search_url(term))?;
        }
        self.host.end_group()?;
        Ok(())
    }
}

impl<H: ChecklistHost> PatternSurface for ChecklistSurface<H> {
    type Output = H;

    fn render(mut self, pattern: &PatternDocument) -> Result<H, PipelineError> {
        self.render_header(pattern)?;

        let mut steps = pattern.steps().peekable();
        for (index, component) in pattern.components.iter().enumerate() {
            self.host.begin_group(component.display_name(), false)?;
            while let Some((id, step)) = steps.next_if(|(id, _)| id.component == index) {
                self.host
                    .toggle(id, step, pattern.progress.is_checked(id))?;
                if let Some(tokens) = round_counter(step) {
                    self.host.counter(&tokens, Color::COUNTER_ACCENT)?;
                }
            }
            self.host.end_group()?;
        }
        log::debug!(
            "Rendered checklist for '{}' with {} steps",
            pattern.display_name(),
            pattern.step_count()
        );
        Ok(self.host)
    }
}
