//! The printable surface: a cover page followed by the flattened pattern
//! text, laid out top to bottom on a [`PageCanvas`].
//!
//! Layout is driven only by each line's classification. All vertical
//! positions are tracked through the canvas cursor; page breaks happen when
//! the next row would cross the bottom margin.

use crate::blocks::blocks_from_text;
use crate::cover::RasterizedImage;
use crate::error::PipelineError;
use crate::model::{FALLBACK_TITLE, to_text};
use crate::settings::DocumentSettings;
use crate::surface::PatternSurface;
use gurumi_layout::{PageGeometry, Placement, StandardFont, break_lines, place_block};
use gurumi_render_core::{PageCanvas, TextRun};
use gurumi_style::{TextAlign, TextStyle, mm};
use gurumi_text::sanitize;
use gurumi_traits::ResourceProvider;
use gurumi_types::{BlockKind, PatternDocument, RenderBlock};
use std::path::Path;

const LOGO_WIDTH_MM: f32 = 30.0;
const LOGO_TOP_MM: f32 = 10.0;
const COVER_IMAGE_WIDTH_MM: f32 = 70.0;
const STEP_INDENT_MM: f32 = 15.0;
const COUNTER_INDENT_MM: f32 = 20.0;
const FOOTER_FROM_BOTTOM_MM: f32 = 15.0;

/// Rows with this much overhang still count as fitting.
const EPSILON: f32 = 0.01;

/// Renders a pattern to a paginated document.
pub struct PaginatedSurface<C: PageCanvas> {
    canvas: C,
    settings: DocumentSettings,
    geometry: PageGeometry,
    cover: Option<RasterizedImage>,
    logo: Option<RasterizedImage>,
}

impl<C: PageCanvas> PaginatedSurface<C> {
    pub fn new(canvas: C, settings: DocumentSettings) -> Self {
        let (width, height) = canvas.page_size();
        let geometry = PageGeometry::new(width, height, settings.margins);
        Self {
            canvas,
            settings,
            geometry,
            cover: None,
            logo: None,
        }
    }

    /// Uses `bytes` as the cover picture. Undecodable images are dropped
    /// with a warning and the cover is rendered without a picture.
    pub fn with_cover_bytes(mut self, bytes: &[u8]) -> Self {
        self.cover = self.rasterize("cover image", bytes);
        self
    }

    /// Loads the logo from `provider`. A missing or unreadable logo is
    /// skipped.
    pub fn with_logo(mut self, provider: &dyn ResourceProvider, key: &str) -> Self {
        if let Some(data) = provider.load_optional(key) {
            self.logo = self.rasterize("logo", &data);
        }
        self
    }

    /// The staged JPEG of the cover picture, while the surface is alive.
    pub fn cover_path(&self) -> Option<&Path> {
        self.cover.as_ref().map(RasterizedImage::path)
    }

    fn rasterize(&self, what: &str, bytes: &[u8]) -> Option<RasterizedImage> {
        match RasterizedImage::rasterize(bytes, self.settings.scratch_dir.as_deref()) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Skipping {}: {}", what, e);
                None
            }
        }
    }

    /// Lays out `text` under a cover page titled `title` and serializes the
    /// document.
    pub fn render_text(mut self, title: &str, text: &str) -> Result<Vec<u8>, PipelineError> {
        self.render_cover(&sanitize(title))?;
        self.start_page()?;

        let blocks = blocks_from_text(text);
        log::debug!("Laying out {} blocks", blocks.len());
        for block in &blocks {
            self.render_block(block)?;
        }

        Ok(self.canvas.finish()?)
    }

    /// Opens a page and draws its running header and footer.
    fn start_page(&mut self) -> Result<(), PipelineError> {
        self.canvas.start_page()?;
        let number = self.canvas.page_count();
        let left = self.geometry.content_left();
        let width = self.geometry.content_width();

        let footer = format!("Page {}", number);
        self.canvas.place_text(&TextRun {
            text: &footer,
            x: left,
            y: self.geometry.height - mm(FOOTER_FROM_BOTTOM_MM),
            width,
            line_height: mm(10.0),
            style: TextStyle::italic(8.0),
            align: TextAlign::Center,
        })?;

        self.canvas.set_cursor_y(self.geometry.content_top());
        if number > 1 {
            let header = sanitize(&self.settings.header_text);
            self.canvas.place_text(&TextRun {
                text: &header,
                x: left,
                y: self.geometry.content_top(),
                width,
                line_height: mm(10.0),
                style: TextStyle::italic(10.0),
                align: TextAlign::Right,
            })?;
            self.canvas.move_down(mm(10.0) + mm(5.0));
        }
        Ok(())
    }

    /// Top of the body on a fresh page after the cover.
    fn body_top(&self) -> f32 {
        self.geometry.content_top() + mm(15.0)
    }

    fn render_cover(&mut self, title: &str) -> Result<(), PipelineError> {
        self.start_page()?;
        let center_x = |width: f32, page_width: f32| (page_width - width) / 2.0;

        if let Some(logo) = &self.logo {
            let width = mm(LOGO_WIDTH_MM);
            self.canvas.place_image(
                logo.image(),
                center_x(width, self.geometry.width),
                mm(LOGO_TOP_MM),
                width,
            )?;
        }
        self.canvas.move_down(mm(30.0));

        self.write_rows(title, TextStyle::bold(24.0), mm(10.0), TextAlign::Center)?;
        self.canvas.move_down(mm(10.0));

        if let Some(cover) = &self.cover {
            let image = cover.image();
            let y = self.canvas.cursor_y();
            // Room for the picture, the gap below it and the creator line.
            let room = self.geometry.break_y() - y - mm(20.0) - mm(10.0);
            let mut width = mm(COVER_IMAGE_WIDTH_MM);
            let natural = image.height_at(width);
            if natural > room {
                width *= (room / natural).max(0.0);
                log::debug!("Cover picture shrunk to {:.1}pt wide to fit the cover", width);
            }
            if width > 0.0 {
                let height = self.canvas.place_image(
                    image,
                    center_x(width, self.geometry.width),
                    y,
                    width,
                )?;
                self.canvas.move_down(height);
            }
        }
        self.canvas.move_down(mm(20.0));

        let creator = sanitize(&self.settings.creator_line);
        self.write_rows(&creator, TextStyle::regular(14.0), mm(10.0), TextAlign::Center)
    }

    fn render_block(&mut self, block: &RenderBlock) -> Result<(), PipelineError> {
        let left = self.geometry.content_left();
        match block.kind {
            BlockKind::Spacer => self.canvas.move_down(mm(5.0)),
            BlockKind::Heading(1) => {
                self.canvas.move_down(mm(5.0));
                self.write_rows(&block.text, TextStyle::bold(16.0), mm(10.0), TextAlign::Left)?;
                self.canvas.move_down(mm(2.0));
            }
            BlockKind::Heading(2) => {
                self.canvas.move_down(mm(4.0));
                self.write_rows(&block.text, TextStyle::bold(14.0), mm(10.0), TextAlign::Left)?;
            }
            BlockKind::Heading(_) => {
                self.write_rows(&block.text, TextStyle::bold(12.0), mm(8.0), TextAlign::Left)?;
            }
            BlockKind::Bullet => {
                let text = format!("- {}", block.text);
                self.write_rows_at(&text, mm(STEP_INDENT_MM), TextStyle::regular(12.0), mm(6.0))?;
            }
            BlockKind::Numbered => {
                self.write_rows_at(
                    &block.text,
                    mm(STEP_INDENT_MM),
                    TextStyle::regular(12.0),
                    mm(6.0),
                )?;
            }
            BlockKind::Paragraph => {
                self.write_rows_at(&block.text, left, TextStyle::regular(12.0), mm(6.0))?;
            }
        }

        if let Some(tokens) = &block.counter {
            let text = tokens.join(" ");
            self.write_rows_at(
                &text,
                mm(COUNTER_INDENT_MM),
                TextStyle::mono_bold(12.0),
                mm(6.0),
            )?;
            self.canvas.move_down(mm(2.0));
        }
        Ok(())
    }

    /// Full-width rows at the left margin with the given alignment.
    fn write_rows(
        &mut self,
        text: &str,
        style: TextStyle,
        line_height: f32,
        align: TextAlign,
    ) -> Result<(), PipelineError> {
        let x = self.geometry.content_left();
        self.write_rows_aligned(text, x, style, line_height, align)
    }

    fn write_rows_at(
        &mut self,
        text: &str,
        x: f32,
        style: TextStyle,
        line_height: f32,
    ) -> Result<(), PipelineError> {
        self.write_rows_aligned(text, x, style, line_height, TextAlign::Left)
    }

    /// Wraps `text` into rows starting at `x` and draws them, keeping the
    /// rows of one logical line on one page when they fit on an empty page.
    fn write_rows_aligned(
        &mut self,
        text: &str,
        x: f32,
        style: TextStyle,
        line_height: f32,
        align: TextAlign,
    ) -> Result<(), PipelineError> {
        let width = self.geometry.width_from(x);
        let font = StandardFont::for_style(&style);
        let rows = break_lines(text, font, style.size, width);
        let height = rows.len() as f32 * line_height;
        let break_y = self.geometry.break_y();

        if place_block(self.canvas.cursor_y(), height, self.body_top(), break_y)
            == Placement::NextPage
        {
            self.start_page()?;
        }

        for row in &rows {
            if self.canvas.cursor_y() + line_height > break_y + EPSILON
                && self.canvas.cursor_y() > self.body_top() + EPSILON
            {
                self.start_page()?;
            }
            let y = self.canvas.cursor_y();
            self.canvas.place_text(&TextRun {
                text: row,
                x,
                y,
                width,
                line_height,
                style,
                align,
            })?;
            self.canvas.move_down(line_height);
        }
        Ok(())
    }
}

impl<C: PageCanvas> PatternSurface for PaginatedSurface<C> {
    type Output = Vec<u8>;

    fn render(self, pattern: &PatternDocument) -> Result<Vec<u8>, PipelineError> {
        self.render_text(pattern.title_or(FALLBACK_TITLE), &to_text(pattern))
    }
}
