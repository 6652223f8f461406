//! Measuring and placing text for the paginated surface.
//!
//! The document only uses the PDF standard fonts, so measurement works from
//! their published advance widths rather than shaping font files.

pub mod algorithms;
pub mod fonts;
pub mod page;
pub mod text;

pub use algorithms::pagination::{Placement, place_block};
pub use fonts::StandardFont;
pub use page::PageGeometry;
pub use text::wrapper::break_lines;
