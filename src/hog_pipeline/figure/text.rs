//! Title rendering with the bundled DejaVu Sans face.

use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::hog_pipeline::common::error::{HogError, Result};

static TITLE_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

pub fn title_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(TITLE_FONT).map_err(|e| HogError::FontError(e.to_string()))
}

/// Draws `text` horizontally centred on `centre_x` with its top edge at `top`.
/// Glyphs falling outside the canvas are clipped.
pub fn draw_centred_text(
    canvas: &mut RgbImage,
    font: &FontRef<'_>,
    text: &str,
    size_px: f32,
    centre_x: i64,
    top: i64,
    colour: [u8; 3],
) {
    if text.is_empty() {
        return;
    }
    let scale = PxScale::from(size_px);
    let (text_w, _) = text_size(scale, font, text);
    let x = centre_x - text_w as i64 / 2;
    draw_text_mut(canvas, Rgb(colour), x as i32, top as i32, scale, font, text);
}
