//! PDF output for the paginated surface.
//!
//! [`LopdfCanvas`] implements [`PageCanvas`](gurumi_render_core::PageCanvas)
//! on top of [`PdfWriter`], which assembles a `lopdf` document using the
//! standard Type1 fonts.

mod canvas;
mod writer;

pub use canvas::LopdfCanvas;
pub use writer::PdfWriter;
