//! Shared data model for the gurumi crates.
//!
//! - [`PatternDocument`]: the structured pattern record and its components
//! - [`Progress`] / [`StepId`]: checklist state keyed by step position
//! - [`RoundRange`]: a validated round/row range and its counter expansion
//! - [`RenderBlock`]: one styled output block of a render pass

pub mod block;
pub mod color;
pub mod pattern;
pub mod progress;
pub mod range;

pub use block::{BlockKind, RenderBlock};
pub use color::Color;
pub use pattern::{Component, HybridSuggestion, PatternDocument};
pub use progress::{ParseStepIdError, Progress, StepId};
pub use range::RoundRange;
