use crate::error::RenderError;
use crate::traits::ChecklistHost;
use gurumi_types::{Color, StepId};
use serde::Serialize;

/// One call made on a [`ChecklistHost`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChecklistEvent {
    Title { text: String },
    Info { label: String, value: String },
    Link { label: String, url: String },
    BeginGroup { label: String, expanded: bool },
    EndGroup,
    Toggle { id: StepId, label: String, checked: bool },
    Counter { tokens: Vec<String>, accent: Color },
}

/// A host that keeps every call, in order.
///
/// Serializes to a JSON array of events for front ends that draw the
/// checklist themselves.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RecordingChecklist {
    events: Vec<ChecklistEvent>,
}

impl RecordingChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ChecklistEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ChecklistEvent> {
        self.events
    }

    fn push(&mut self, event: ChecklistEvent) -> Result<(), RenderError> {
        self.events.push(event);
        Ok(())
    }
}

impl ChecklistHost for RecordingChecklist {
    fn title(&mut self, text: &str) -> Result<(), RenderError> {
        self.push(ChecklistEvent::Title {
            text: text.to_string(),
        })
    }

    fn info(&mut self, label: &str, value: &str) -> Result<(), RenderError> {
        self.push(ChecklistEvent::Info {
            label: label.to_string(),
            value: value.to_string(),
        })
    }

    fn link(&mut self, label: &str, url: &str) -> Result<(), RenderError> {
        self.push(ChecklistEvent::Link {
            label: label.to_string(),
            url: url.to_string(),
        })
    }

    fn begin_group(&mut self, label: &str, expanded: bool) -> Result<(), RenderError> {
        self.push(ChecklistEvent::BeginGroup {
            label: label.to_string(),
            expanded,
        })
    }

    fn end_group(&mut self) -> Result<(), RenderError> {
        self.push(ChecklistEvent::EndGroup)
    }

    fn toggle(&mut self, id: StepId, label: &str, checked: bool) -> Result<(), RenderError> {
        self.push(ChecklistEvent::Toggle {
            id,
            label: label.to_string(),
            checked,
        })
    }

    fn counter(&mut self, tokens: &[String], accent: Color) -> Result<(), RenderError> {
        self.push(ChecklistEvent::Counter {
            tokens: tokens.to_vec(),
            accent,
        })
    }
}
