//! Source image types

use image::DynamicImage;

/// A decoded input image, kept in its original colour layout for display.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub image: DynamicImage,
}

impl SourceImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    pub fn channels(&self) -> usize {
        self.image.color().channel_count() as usize
    }

    /// Array-style shape: `[rows, cols]` for single channel images,
    /// `[rows, cols, channels]` otherwise.
    pub fn shape(&self) -> Vec<usize> {
        match self.channels() {
            1 => vec![self.height(), self.width()],
            c => vec![self.height(), self.width(), c],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage, RgbaImage};

    #[test]
    fn test_shape_of_color_image() {
        let source = SourceImage::new(DynamicImage::ImageRgb8(RgbImage::new(40, 30)));
        assert_eq!(source.shape(), vec![30, 40, 3]);
    }

    #[test]
    fn test_shape_of_gray_image() {
        let source = SourceImage::new(DynamicImage::ImageLuma8(GrayImage::new(40, 30)));
        assert_eq!(source.shape(), vec![30, 40]);
    }

    #[test]
    fn test_shape_of_rgba_image() {
        let source = SourceImage::new(DynamicImage::ImageRgba8(RgbaImage::new(5, 7)));
        assert_eq!(source.shape(), vec![7, 5, 4]);
        assert_eq!(source.channels(), 4);
    }
}
