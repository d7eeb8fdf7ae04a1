use std::io::Write;

use image::RgbImage;

use crate::hog_pipeline::common::error::Result;
use crate::hog_pipeline::figure::types::ConversionConfig;

pub trait FigureWriter {
    fn write_figure(&self, figure: &RgbImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
