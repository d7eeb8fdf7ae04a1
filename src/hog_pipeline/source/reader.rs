use crate::hog_pipeline::common::error::Result;
use crate::hog_pipeline::source::types::SourceImage;

pub trait ImageReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceImage>;
}
