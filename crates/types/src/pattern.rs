//! The structured pattern record.
//!
//! Records come from a generative model and from older inventories, so reading
//! is forgiving: missing fields take defaults and a malformed
//! `hybrid_suggestion` is treated as absent instead of failing the record.

use crate::progress::{Progress, StepId};
use serde::{Deserialize, Deserializer, Serialize};

fn default_difficulty() -> String {
    "Unknown".to_string()
}

/// A complete crochet pattern with its checklist progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDocument {
    #[serde(default, alias = "name")]
    pub project_name: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_suggestion",
        skip_serializing_if = "Option::is_none"
    )]
    pub hybrid_suggestion: Option<HybridSuggestion>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub progress: Progress,
}

impl Default for PatternDocument {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            difficulty: default_difficulty(),
            materials: Vec::new(),
            hybrid_suggestion: None,
            components: Vec::new(),
            progress: Progress::new(),
        }
    }
}

/// One part of the pattern, in assembly order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A recommendation to make a component some other way, e.g. 3D printing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridSuggestion {
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub search_term: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl HybridSuggestion {
    pub fn is_empty(&self) -> bool {
        self.kind.trim().is_empty()
            && self.description.trim().is_empty()
            && self.search_term.trim().is_empty()
    }
}

fn lenient_suggestion<'de, D>(deserializer: D) -> Result<Option<HybridSuggestion>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Suggestion(HybridSuggestion),
        Other(serde_json::Value),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Suggestion(s)) if !s.is_empty() => Ok(Some(s)),
        Some(Raw::Other(value)) => {
            log::debug!("Ignoring malformed hybrid_suggestion: {}", value);
            Ok(None)
        }
        _ => Ok(None),
    }
}

impl Component {
    pub fn new(name: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    pub fn display_name(&self) -> &str {
        non_empty_or(&self.name, "Part")
    }
}

impl PatternDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The project name, or `fallback` when it is blank.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_empty_or(&self.project_name, fallback)
    }

    pub fn display_name(&self) -> &str {
        self.title_or("Unknown Project")
    }

    /// Every step with its positional id, in component then step order.
    pub fn steps(&self) -> impl Iterator<Item = (StepId, &str)> + '_ {
        self.components.iter().enumerate().flat_map(|(c, component)| {
            component
                .steps
                .iter()
                .enumerate()
                .map(move |(s, step)| (StepId::new(c, s), step.as_str()))
        })
    }

    pub fn step(&self, id: StepId) -> Option<&str> {
        self.components
            .get(id.component)?
            .steps
            .get(id.step)
            .map(String::as_str)
    }

    pub fn step_count(&self) -> usize {
        self.components.iter().map(|c| c.steps.len()).sum()
    }

    /// Drops progress entries that no longer address a step.
    pub fn retain_valid_progress(&mut self) {
        let components = &self.components;
        self.progress.retain(|id, _| {
            components
                .get(id.component)
                .is_some_and(|c| id.step < c.steps.len())
        });
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
