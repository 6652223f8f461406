//! Host-facing abstractions shared by the render surfaces:
//! - [`PageCanvas`]: a paginated drawing target that serializes to bytes
//! - [`ChecklistHost`]: an interactive checklist widget host
//! - [`RecordingChecklist`]: a host that records its calls, for JSON output and tests
//! - [`RenderError`] and small encoding helpers

mod error;
mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use recording::{ChecklistEvent, RecordingChecklist};
pub use traits::{ChecklistHost, PageCanvas};
pub use types::{JpegImage, TextRun};
