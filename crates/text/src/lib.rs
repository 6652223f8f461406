//! Pattern-text interpretation shared by every render surface.
//!
//! Lines are [`sanitize`]d, then [`classify`]d into headings, steps and
//! narrative; [`find_round_range`] pulls an embedded "Rnds 5-10" reference out
//! of a line so it can be expanded into counters.

pub mod classify;
pub mod range;
pub mod sanitize;

pub use classify::{ClassifiedLine, LineKind, classify, classify_sanitized, classify_text};
pub use range::{find_round_range, round_counter, round_counter_text};
pub use sanitize::{is_encodable, sanitize};
