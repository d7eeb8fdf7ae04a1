use image::DynamicImage;
use tracing::debug;

use crate::hog_pipeline::grayscale::types::GrayImageF32;

/// Luminance weights for linear RGB (CIE / ITU-R 709 primaries).
const LUMA_WEIGHTS: [f32; 3] = [0.2125, 0.7154, 0.0721];

/// Converts a decoded image to luminance in `[0, 1]`.
///
/// Colour images are weighted with [`LUMA_WEIGHTS`]; an alpha channel is
/// ignored. Single channel images are only rescaled. The output always has
/// the input's width and height.
pub fn to_grayscale(image: &DynamicImage) -> GrayImageF32 {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let data: Vec<f32> = if image.color().has_color() {
        debug!("Converting {}x{} colour image to grayscale", width, height);
        image
            .to_rgb32f()
            .pixels()
            .map(|p| LUMA_WEIGHTS[0] * p[0] + LUMA_WEIGHTS[1] * p[1] + LUMA_WEIGHTS[2] * p[2])
            .collect()
    } else {
        debug!("Image {}x{} is already single channel", width, height);
        image.to_luma32f().into_raw()
    };

    GrayImageF32 {
        width,
        height,
        data,
    }
}
