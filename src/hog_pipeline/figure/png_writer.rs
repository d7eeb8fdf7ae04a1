use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use tracing::debug;

use crate::hog_pipeline::common::error::{HogError, Result};
use crate::hog_pipeline::figure::types::{ConversionConfig, PngCompression};
use crate::hog_pipeline::figure::writer::FigureWriter;

pub struct PngFigureWriter;

impl FigureWriter for PngFigureWriter {
    fn write_figure(&self, figure: &RgbImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", figure.width(), figure.height());

        let mut buffer = Vec::new();

        let compression = match config.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        PngEncoder::new_with_quality(&mut buffer, compression, FilterType::Adaptive)
            .write_image(
                figure.as_raw(),
                figure.width(),
                figure.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| HogError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
