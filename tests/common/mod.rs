pub mod fixtures;
pub mod pdf_assertions;

use gurumi::{GurumiConfig, PatternDocument, Session};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page, 1-based.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Configuration that never picks up a logo from the working directory.
pub fn test_config() -> GurumiConfig {
    GurumiConfig::builder().without_logo().build()
}

/// Renders `pattern` with an optional cover picture.
pub fn render_pdf(
    pattern: PatternDocument,
    picture: Option<Vec<u8>>,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    render_pdf_with(pattern, picture, &test_config())
}

pub fn render_pdf_with(
    pattern: PatternDocument,
    picture: Option<Vec<u8>>,
    config: &GurumiConfig,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let mut session = Session::with_pattern(pattern);
    session.set_picture(picture);
    let bytes = session.render_pdf(config)?;
    GeneratedPdf::from_bytes(bytes)
}
