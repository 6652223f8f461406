use gurumi_layout::StandardFont;
use gurumi_render_core::utils::to_win_ansi;
use gurumi_render_core::{JpegImage, RenderError};
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// Builds a PDF document page by page.
///
/// Every page shares one resource dictionary holding the standard fonts and
/// any images added so far; it is written when the document is finished.
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    fonts: Dictionary,
    xobjects: Dictionary,
    page_ids: Vec<ObjectId>,
    info: Dictionary,
}

impl PdfWriter {
    pub fn new(version: &str) -> Self {
        let mut doc = Document::with_version(version);
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in StandardFont::ALL {
            let font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            let font_id = doc.add_object(font_dict);
            fonts.set(font.resource_name(), font_id);
        }

        Self {
            doc,
            pages_id,
            resources_id,
            fonts,
            xobjects: Dictionary::new(),
            page_ids: Vec::new(),
            info: Dictionary::new(),
        }
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let data = content.encode()?;
        Ok(self.doc.add_object(Stream::new(dictionary! {}, data)))
    }

    /// Embeds a JPEG as a DCTDecode image XObject and returns its resource name.
    pub fn add_jpeg(&mut self, image: &JpegImage) -> Vec<u8> {
        let image_dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8i64,
            "Filter" => "DCTDecode",
        };
        let id = self
            .doc
            .add_object(Stream::new(image_dict, image.data.clone()));
        let name = format!("Im{}", self.xobjects.len() + 1).into_bytes();
        self.xobjects.set(name.clone(), id);
        name
    }

    pub fn write_page(&mut self, content_id: ObjectId, width: f32, height: f32) -> ObjectId {
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => Object::Array(vec![0.0f32.into(), 0.0f32.into(), width.into(), height.into()]),
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.doc.add_object(page);
        self.page_ids.push(page_id);
        page_id
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Sets a document information entry such as `Title`.
    pub fn set_info(&mut self, key: &str, value: &str) {
        self.info.set(
            key,
            Object::String(to_win_ansi(value), StringFormat::Literal),
        );
    }

    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let mut resources = dictionary! { "Font" => self.fonts };
        if !self.xobjects.is_empty() {
            resources.set("XObject", self.xobjects);
        }
        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        if !self.info.is_empty() {
            let info_id = self.doc.add_object(self.info);
            self.doc.trailer.set("Info", info_id);
        }

        let mut buffer = Vec::new();
        self.doc.save_to(&mut buffer)?;
        log::debug!(
            "Wrote PDF with {} pages ({} bytes)",
            self.page_ids.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}
