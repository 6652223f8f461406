use crate::error::RenderError;
use crate::types::{JpegImage, TextRun};
use gurumi_types::{Color, StepId};

/// A paginated drawing target, coordinates in points from the top-left.
///
/// The canvas owns the vertical cursor so that a surface can be written as a
/// simple top-to-bottom walk.
pub trait PageCanvas {
    /// `(width, height)` of every page.
    fn page_size(&self) -> (f32, f32);

    fn page_count(&self) -> usize;

    /// Closes the current page, if any, and opens a new one with the cursor
    /// at the top edge.
    fn start_page(&mut self) -> Result<(), RenderError>;

    fn cursor_y(&self) -> f32;

    fn set_cursor_y(&mut self, y: f32);

    fn move_down(&mut self, dy: f32) {
        let y = self.cursor_y();
        self.set_cursor_y(y + dy);
    }

    /// Draws one row of text. Does not move the cursor.
    fn place_text(&mut self, run: &TextRun<'_>) -> Result<(), RenderError>;

    /// Draws `image` scaled to `width` with its top-left corner at `(x, y)`
    /// and returns the drawn height. Does not move the cursor.
    fn place_image(
        &mut self,
        image: &JpegImage,
        x: f32,
        y: f32,
        width: f32,
    ) -> Result<f32, RenderError>;

    /// Closes the last page and serializes the document.
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}

/// Widgets an interactive checklist is built from.
pub trait ChecklistHost {
    fn title(&mut self, text: &str) -> Result<(), RenderError>;

    /// A labelled line of project information, e.g. difficulty.
    fn info(&mut self, label: &str, value: &str) -> Result<(), RenderError>;

    fn link(&mut self, label: &str, url: &str) -> Result<(), RenderError>;

    /// Opens a collapsible group. Groups do not nest.
    fn begin_group(&mut self, label: &str, expanded: bool) -> Result<(), RenderError>;

    fn end_group(&mut self) -> Result<(), RenderError>;

    /// A checkbox for one step, keyed by its position in the pattern.
    fn toggle(&mut self, id: StepId, label: &str, checked: bool) -> Result<(), RenderError>;

    /// Round counters shown under the step they were extracted from.
    fn counter(&mut self, tokens: &[String], accent: Color) -> Result<(), RenderError>;
}
