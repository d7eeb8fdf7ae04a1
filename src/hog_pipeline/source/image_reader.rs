//! Image reader implementation using the `image` crate.
//!
//! Supports every format the `image` crate can decode with its default
//! features (JPEG, PNG, BMP, TIFF, WebP, ...). The format is guessed from
//! the file contents, not from the file name.

use tracing::debug;

use crate::hog_pipeline::common::error::{HogError, Result};
use crate::hog_pipeline::source::reader::ImageReader;
use crate::hog_pipeline::source::types::SourceImage;

pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    /// Decodes an in-memory image file.
    ///
    /// # Errors
    ///
    /// * `HogError::DecodeError` - the bytes are not a supported or valid image
    fn read_image(&self, data: &[u8]) -> Result<SourceImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded =
            image::load_from_memory(data).map_err(|e| HogError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(SourceImage::new(decoded))
    }
}
