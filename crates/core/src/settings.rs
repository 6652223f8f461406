use gurumi_style::{Margins, PageSize};
use serde::Deserialize;
use std::path::PathBuf;

/// Page setup and fixed strings for the paginated surface.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentSettings {
    pub page_size: PageSize,
    /// The bottom margin is where the automatic page break happens.
    pub margins: Margins,
    /// Running header on every page after the cover.
    pub header_text: String,
    /// Line under the cover picture.
    pub creator_line: String,
    /// Where rasterized images are staged; the system temp dir when unset.
    pub scratch_dir: Option<PathBuf>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: Margins::from_mm(10.0, 10.0, 15.0, 10.0),
            header_text: "Ani-Gurumi AI - Crochet Pattern".to_string(),
            creator_line: "Created by Ani-Gurumi AI".to_string(),
            scratch_dir: None,
        }
    }
}
