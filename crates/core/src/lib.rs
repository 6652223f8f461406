//! # gurumi-core
//!
//! Turns a [`PatternDocument`] into something a person can work from:
//! - **model**: flattening the record into markdown-like text
//! - **blocks**: classifying that text into styled render blocks
//! - **checklist**: the interactive surface, driven through a [`ChecklistHost`]
//! - **paginated**: the printable surface, drawn onto a [`PageCanvas`]
//! - **cover**: rasterizing cover pictures and the logo for embedding
//! - **source**: where pattern records come from
//!
//! Both surfaces implement [`PatternSurface`].

pub use gurumi_layout as layout;
pub use gurumi_render_core as render;
pub use gurumi_style as style;
pub use gurumi_text as text;
pub use gurumi_traits as traits;
pub use gurumi_types as types;

pub mod blocks;
pub mod checklist;
pub mod cover;
pub mod error;
pub mod model;
pub mod paginated;
pub mod settings;
pub mod source;
pub mod surface;

pub use blocks::{blocks_from_lines, blocks_from_text};
pub use checklist::{ChecklistSurface, thingiverse_search_url};
pub use cover::RasterizedImage;
pub use error::PipelineError;
pub use model::to_text;
pub use paginated::PaginatedSurface;
pub use settings::DocumentSettings;
pub use source::{JsonPatternSource, PatternSource};
pub use surface::PatternSurface;

pub use gurumi_render_core::{ChecklistHost, PageCanvas, RenderError};
pub use gurumi_types::{Component, HybridSuggestion, PatternDocument, Progress, StepId};
