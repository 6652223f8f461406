use crate::writer::PdfWriter;
use gurumi_layout::StandardFont;
use gurumi_render_core::utils::{flip_y, to_win_ansi};
use gurumi_render_core::{JpegImage, PageCanvas, RenderError, TextRun};
use gurumi_style::{PageSize, TextAlign};
use gurumi_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Fraction of the font size between the middle of a line box and the
/// baseline.
const BASELINE_SHIFT: f32 = 0.3;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(StandardFont, f32)>,
    fill_color: Option<Color>,
}

struct OpenPage {
    content: Content,
    state: PageRenderState,
}

/// A [`PageCanvas`] that produces a PDF through [`PdfWriter`].
pub struct LopdfCanvas {
    writer: PdfWriter,
    width: f32,
    height: f32,
    page: Option<OpenPage>,
    cursor_y: f32,
}

impl LopdfCanvas {
    pub fn new(size: PageSize) -> Self {
        let (width, height) = size.dimensions_pt();
        Self {
            writer: PdfWriter::new("1.7"),
            width,
            height,
            page: None,
            cursor_y: 0.0,
        }
    }

    /// Sets the document's `Title` information entry.
    pub fn with_title(mut self, title: &str) -> Self {
        self.writer.set_info("Title", title);
        self.writer.set_info("Producer", "gurumi");
        self
    }

    fn page_mut(&mut self) -> Result<&mut OpenPage, RenderError> {
        self.page
            .as_mut()
            .ok_or_else(|| RenderError::Other("No page started".into()))
    }

    fn close_page(&mut self) -> Result<(), RenderError> {
        if let Some(page) = self.page.take() {
            let content_id = self.writer.write_content_stream(page.content)?;
            self.writer.write_page(content_id, self.width, self.height);
        }
        Ok(())
    }
}

impl OpenPage {
    fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content
            .operations
            .push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        if self.state.font != Some((font, size)) {
            self.push(
                "Tf",
                vec![
                    Object::Name(font.resource_name().as_bytes().to_vec()),
                    size.into(),
                ],
            );
            self.state.font = Some((font, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.unit_components();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }
}

impl PageCanvas for LopdfCanvas {
    fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn page_count(&self) -> usize {
        self.writer.page_count() + usize::from(self.page.is_some())
    }

    fn start_page(&mut self) -> Result<(), RenderError> {
        self.close_page()?;
        self.page = Some(OpenPage::new());
        self.cursor_y = 0.0;
        Ok(())
    }

    fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    fn set_cursor_y(&mut self, y: f32) {
        self.cursor_y = y;
    }

    fn place_text(&mut self, run: &TextRun<'_>) -> Result<(), RenderError> {
        if run.text.trim().is_empty() {
            return Ok(());
        }
        let font = StandardFont::for_style(&run.style);
        let size = run.style.size;
        let text_width = font.text_width(run.text, size);
        let x = match run.align {
            TextAlign::Left => run.x,
            TextAlign::Center => run.x + (run.width - text_width) / 2.0,
            TextAlign::Right => run.x + run.width - text_width,
        };
        let baseline = run.y + run.line_height / 2.0 + BASELINE_SHIFT * size;
        let pdf_y = flip_y(baseline, self.height);

        let page = self.page_mut()?;
        page.push("BT", vec![]);
        page.set_font(font, size);
        page.set_fill_color(run.style.color);
        page.push("Td", vec![x.into(), pdf_y.into()]);
        page.push(
            "Tj",
            vec![Object::String(to_win_ansi(run.text), StringFormat::Literal)],
        );
        page.push("ET", vec![]);
        Ok(())
    }

    fn place_image(
        &mut self,
        image: &JpegImage,
        x: f32,
        y: f32,
        width: f32,
    ) -> Result<f32, RenderError> {
        self.page_mut()?;
        let height = image.height_at(width);
        let name = self.writer.add_jpeg(image);
        let bottom = flip_y(y + height, self.height);

        let page = self.page_mut()?;
        page.push("q", vec![]);
        page.push(
            "cm",
            vec![
                width.into(),
                0.0f32.into(),
                0.0f32.into(),
                height.into(),
                x.into(),
                bottom.into(),
            ],
        );
        page.push("Do", vec![Object::Name(name)]);
        page.push("Q", vec![]);
        Ok(height)
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        if self.page.is_none() && self.writer.page_count() == 0 {
            self.start_page()?;
        }
        self.close_page()?;
        self.writer.finish()
    }
}
