use gurumi_style::{TextAlign, TextStyle};

/// One row of text to place on a page.
///
/// `y` is the top of the row's line box; the canvas positions the baseline
/// inside the box.
#[derive(Debug, Clone, Copy)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
    /// Width of the box the text is aligned in.
    pub width: f32,
    pub line_height: f32,
    pub style: TextStyle,
    pub align: TextAlign,
}

/// A baseline JPEG ready to embed with DCTDecode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpegImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl JpegImage {
    /// Height of the image when drawn `width` points wide.
    pub fn height_at(&self, width: f32) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        width * self.height as f32 / self.width as f32
    }
}
