//! Checklist progress keyed by step position.
//!
//! A [`StepId`] is the pair `(component index, step index)` rendered as
//! `"{component}_{step}"`. It is only stable while the order of components and
//! steps is unchanged: reordering a pattern invalidates saved progress.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix used by older inventories for progress keys (`"step_0_3"`).
const LEGACY_PREFIX: &str = "step_";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid step id '{0}': expected '<component>_<step>'")]
pub struct ParseStepIdError(pub String);

/// Positional identifier of one step in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId {
    pub component: usize,
    pub step: usize,
}

impl StepId {
    pub fn new(component: usize, step: usize) -> Self {
        Self { component, step }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.component, self.step)
    }
}

impl FromStr for StepId {
    type Err = ParseStepIdError;

    /// Accepts `"2_5"` and the legacy `"step_2_5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix(LEGACY_PREFIX).unwrap_or(s);
        let (component, step) = body
            .split_once('_')
            .ok_or_else(|| ParseStepIdError(s.to_string()))?;
        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| ParseStepIdError(s.to_string()))
        };
        Ok(StepId::new(parse(component)?, parse(step)?))
    }
}

impl Serialize for StepId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StepId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Which checklist items have been marked complete.
///
/// Missing entries read as unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<StepId, bool>);

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, id: StepId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: StepId, checked: bool) {
        self.0.insert(id, checked);
    }

    /// Flips one entry and returns its new state.
    pub fn toggle(&mut self, id: StepId) -> bool {
        let checked = !self.is_checked(id);
        self.set(id, checked);
        checked
    }

    pub fn retain<F: FnMut(StepId, bool) -> bool>(&mut self, mut keep: F) {
        self.0.retain(|id, checked| keep(*id, *checked));
    }

    pub fn completed(&self) -> usize {
        self.0.values().filter(|checked| **checked).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StepId, bool)> + '_ {
        self.0.iter().map(|(id, checked)| (*id, *checked))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StepId, bool)> for Progress {
    fn from_iter<I: IntoIterator<Item = (StepId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Progress {
    /// Unparseable keys are skipped rather than failing the whole record.
    /// When a step appears under both key forms, the current form wins.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        let (legacy, current): (Vec<_>, Vec<_>) = raw
            .into_iter()
            .partition(|(key, _)| key.starts_with(LEGACY_PREFIX));

        let mut progress = Progress::new();
        for (key, checked) in current.into_iter().chain(legacy) {
            let id = match key.parse::<StepId>() {
                Ok(id) => id,
                Err(e) => {
                    log::debug!("Dropping progress entry: {}", e);
                    continue;
                }
            };
            if progress.0.contains_key(&id) {
                log::debug!("Ignoring '{}': step {} is already recorded", key, id);
                continue;
            }
            progress.set(id, checked);
        }
        Ok(progress)
    }
}
