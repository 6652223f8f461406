//! Rasterizing cover pictures and the logo into embeddable JPEGs.
//!
//! Images arrive in whatever format the user uploaded or the generator
//! produced. Each one is decoded, flattened to RGB and re-encoded as a
//! baseline JPEG in a scratch file. The scratch file lives exactly as long as
//! the [`RasterizedImage`] that owns it.

use crate::error::PipelineError;
use gurumi_render_core::JpegImage;
use image::{DynamicImage, ImageFormat};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tempfile::NamedTempFile;

const SCRATCH_PREFIX: &str = "gurumi-cover-";

#[derive(Debug)]
pub struct RasterizedImage {
    image: JpegImage,
    file: NamedTempFile,
}

impl RasterizedImage {
    /// Decodes `bytes` and stages a JPEG copy in `scratch_dir`, or in the
    /// system temp directory when `None`.
    pub fn rasterize(bytes: &[u8], scratch_dir: Option<&Path>) -> Result<Self, PipelineError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX).suffix(".jpg");
        let mut file = match scratch_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        DynamicImage::ImageRgb8(rgb).write_to(&mut file, ImageFormat::Jpeg)?;
        file.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        log::debug!(
            "Rasterized {}x{} image to {} ({} bytes)",
            width,
            height,
            file.path().display(),
            data.len()
        );

        Ok(Self {
            image: JpegImage {
                data,
                width,
                height,
            },
            file,
        })
    }

    pub fn image(&self) -> &JpegImage {
        &self.image
    }

    /// Location of the staged JPEG. Deleted when `self` is dropped.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
