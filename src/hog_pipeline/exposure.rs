//! Intensity rescaling for display.

use crate::hog_pipeline::grayscale::GrayImageF32;

/// Clips every sample to `in_range` and maps that range linearly onto `[0, 1]`.
///
/// A degenerate range (`lo >= hi`) maps everything at or above `lo` to 1
/// and everything below it to 0.
pub fn rescale_intensity(image: &GrayImageF32, in_range: (f32, f32)) -> GrayImageF32 {
    let (lo, hi) = in_range;
    let span = hi - lo;

    let data = image
        .data
        .iter()
        .map(|&v| {
            if span <= 0.0 {
                if v >= lo { 1.0 } else { 0.0 }
            } else {
                (v.clamp(lo, hi) - lo) / span
            }
        })
        .collect();

    GrayImageF32 {
        width: image.width,
        height: image.height,
        data,
    }
}
