//! Side-by-side figure composition.
//!
//! The canvas is split into two equal panels separated by a gutter. The
//! original image goes left, the HOG rendering right. Both rasters share
//! one scale factor so their pixels line up, and each is centred in its
//! panel. A suptitle spans the top of the canvas and each raster carries
//! its own title just above it.
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use tracing::debug;

use crate::hog_pipeline::common::error::{HogError, Result};
use crate::hog_pipeline::figure::text::{draw_centred_text, title_font};
use crate::hog_pipeline::figure::types::ConversionConfig;
use crate::hog_pipeline::grayscale::GrayImageF32;

/// Maps a float raster onto 8-bit grey, stretching its own min..max to
/// black..white. A constant raster comes out black.
pub fn autoscale_to_gray(image: &GrayImageF32) -> GrayImage {
    let (lo, hi) = image.min_max().unwrap_or((0.0, 0.0));
    let span = hi - lo;
    let mut out = GrayImage::new(image.width as u32, image.height as u32);
    for (dst, &v) in out.pixels_mut().zip(image.data.iter()) {
        let level = if span > 0.0 { (v - lo) / span } else { 0.0 };
        *dst = Luma([(level * 255.0).round().clamp(0.0, 255.0) as u8]);
    }
    out
}

/// Height of the band above both panels holding the suptitle.
const SUPTITLE_BAND: u32 = 40;
const SUPTITLE_PX: f32 = 22.0;
/// Height of the band directly above each raster holding its panel title.
const PANEL_TITLE_BAND: u32 = 30;
const PANEL_TITLE_PX: f32 = 17.0;
const TITLE_COLOUR: [u8; 3] = [0, 0, 0];

/// Composes the comparison figure on a `config.width x config.height` canvas.
///
/// An empty suptitle or a pair of empty panel titles reserves no band.
pub fn compose_side_by_side(
    original: &DynamicImage,
    hog_rescaled: &GrayImageF32,
    config: &ConversionConfig,
) -> Result<RgbImage> {
    let invalid_canvas = || HogError::InvalidDimensions(config.width as usize, config.height as usize);

    let suptitle_band = if config.suptitle.is_empty() { 0 } else { SUPTITLE_BAND };
    let (left_title, right_title) = &config.panel_titles;
    let title_band = if left_title.is_empty() && right_title.is_empty() {
        0
    } else {
        PANEL_TITLE_BAND
    };

    let double_margin = config.margin.checked_mul(2).ok_or_else(invalid_canvas)?;
    let panel_w = double_margin
        .checked_add(config.gutter)
        .and_then(|reserved| config.width.checked_sub(reserved))
        .map(|w| w / 2)
        .unwrap_or(0);
    let panel_h = double_margin
        .checked_add(suptitle_band + title_band)
        .and_then(|reserved| config.height.checked_sub(reserved))
        .unwrap_or(0);
    if panel_w == 0 || panel_h == 0 {
        return Err(invalid_canvas());
    }

    let (src_w, src_h) = (original.width(), original.height());
    if src_w == 0 || src_h == 0 {
        return Err(HogError::InvalidDimensions(src_w as usize, src_h as usize));
    }

    let scale = (panel_w as f64 / src_w as f64).min(panel_h as f64 / src_h as f64);
    let target_w = ((src_w as f64 * scale).round() as u32).clamp(1, panel_w);
    let target_h = ((src_h as f64 * scale).round() as u32).clamp(1, panel_h);
    debug!(
        "Panels {}x{}, drawing {}x{} rasters at scale {:.3}",
        panel_w, panel_h, target_w, target_h, scale
    );

    let left = imageops::resize(&original.to_rgb8(), target_w, target_h, FilterType::Triangle);
    let hog_rgb = DynamicImage::ImageLuma8(autoscale_to_gray(hog_rescaled)).to_rgb8();
    let right = imageops::resize(&hog_rgb, target_w, target_h, FilterType::Triangle);

    let mut canvas = RgbImage::from_pixel(config.width, config.height, Rgb(config.background));
    let x_off = (panel_w - target_w) / 2;
    let y = config.margin as i64 + (suptitle_band + title_band + (panel_h - target_h) / 2) as i64;
    let left_x = config.margin as i64 + x_off as i64;
    let right_x = left_x + (panel_w + config.gutter) as i64;
    imageops::overlay(&mut canvas, &left, left_x, y);
    imageops::overlay(&mut canvas, &right, right_x, y);

    if suptitle_band > 0 || title_band > 0 {
        let font = title_font()?;
        draw_centred_text(
            &mut canvas,
            &font,
            &config.suptitle,
            SUPTITLE_PX,
            config.width as i64 / 2,
            config.margin as i64 + 8,
            TITLE_COLOUR,
        );
        let title_top = y - title_band as i64 + 6;
        let half_raster = target_w as i64 / 2;
        for (title, x) in [(left_title, left_x), (right_title, right_x)] {
            draw_centred_text(
                &mut canvas,
                &font,
                title,
                PANEL_TITLE_PX,
                x + half_raster,
                title_top,
                TITLE_COLOUR,
            );
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ConversionConfig {
        ConversionConfig::builder()
            .canvas_size(220, 120)
            .margin(10)
            .gutter(20)
            .suptitle("")
            .panel_titles("", "")
            .build()
    }

    fn titled_config() -> ConversionConfig {
        ConversionConfig::builder()
            .canvas_size(600, 300)
            .margin(10)
            .gutter(20)
            .build()
    }

    fn has_ink(figure: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| figure.get_pixel(x, y) != &Rgb([255, 255, 255]))
    }

    #[test]
    fn test_autoscale_stretches_range() {
        let img = GrayImageF32 {
            width: 3,
            height: 1,
            data: vec![2.0, 3.0, 4.0],
        };
        let gray = autoscale_to_gray(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 0);
        assert_eq!(gray.get_pixel(1, 0)[0], 128);
        assert_eq!(gray.get_pixel(2, 0)[0], 255);
    }

    #[test]
    fn test_autoscale_flat_is_black() {
        let img = GrayImageF32::from_fn(4, 4, |_, _| 0.7);
        assert!(autoscale_to_gray(&img).pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_canvas_has_configured_size() {
        let original = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 50, Rgb([255, 0, 0])));
        let hog = GrayImageF32::new(50, 50);
        let figure = compose_side_by_side(&original, &hog, &small_config()).unwrap();
        assert_eq!(figure.dimensions(), (220, 120));
    }

    #[test]
    fn test_panels_are_placed_left_and_right() {
        let original = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 50, Rgb([255, 0, 0])));
        let hog = GrayImageF32::new(50, 50);
        let figure = compose_side_by_side(&original, &hog, &small_config()).unwrap();

        // panels are 90x100; a square raster becomes 90x90 centred vertically
        assert_eq!(figure.get_pixel(55, 60), &Rgb([255, 0, 0]));
        assert_eq!(figure.get_pixel(165, 60), &Rgb([0, 0, 0]));
        assert_eq!(figure.get_pixel(110, 60), &Rgb([255, 255, 255]));
        assert_eq!(figure.get_pixel(2, 2), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_title_bands_carry_text() {
        let original = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 50, Rgb([255, 0, 0])));
        let hog = GrayImageF32::new(50, 50);
        let figure = compose_side_by_side(&original, &hog, &titled_config()).unwrap();

        // panels are 280x210 below a 40px suptitle band and a 30px title band;
        // the square raster becomes 210x210 starting at row 80
        assert!(has_ink(&figure, 10..590, 10..50));
        assert!(has_ink(&figure, 10..290, 50..80));
        assert!(has_ink(&figure, 310..590, 50..80));
        assert_eq!(figure.get_pixel(150, 85), &Rgb([255, 0, 0]));
        assert_eq!(figure.get_pixel(450, 85), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_empty_titles_leave_top_blank() {
        let original = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 50, Rgb([255, 0, 0])));
        let hog = GrayImageF32::new(50, 50);
        let figure = compose_side_by_side(&original, &hog, &small_config()).unwrap();
        assert!(!has_ink(&figure, 0..220, 0..15));
    }

    #[test]
    fn test_background_colour_fills_margins() {
        let original = DynamicImage::ImageRgb8(RgbImage::new(20, 20));
        let hog = GrayImageF32::new(20, 20);
        let config = ConversionConfig::builder()
            .canvas_size(220, 120)
            .background([10, 20, 30])
            .build();
        let figure = compose_side_by_side(&original, &hog, &config).unwrap();
        assert_eq!(figure.get_pixel(0, 0), &Rgb([10, 20, 30]));
        assert_eq!(figure.get_pixel(219, 119), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_huge_margin_is_rejected_without_overflow() {
        let original = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let hog = GrayImageF32::new(10, 10);
        let config = ConversionConfig::builder()
            .margin(u32::MAX / 2 + 1)
            .build();
        assert!(matches!(
            compose_side_by_side(&original, &hog, &config),
            Err(HogError::InvalidDimensions(1200, 600))
        ));

        let config = ConversionConfig::builder()
            .margin(u32::MAX / 2)
            .gutter(u32::MAX)
            .build();
        assert!(matches!(
            compose_side_by_side(&original, &hog, &config),
            Err(HogError::InvalidDimensions(1200, 600))
        ));
    }

    #[test]
    fn test_canvas_too_small() {
        let original = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let hog = GrayImageF32::new(10, 10);
        let config = ConversionConfig::builder()
            .canvas_size(40, 40)
            .margin(20)
            .build();
        assert!(matches!(
            compose_side_by_side(&original, &hog, &config),
            Err(HogError::InvalidDimensions(40, 40))
        ));
    }
}
