//! Centred-difference image gradients.
//!
//! `g_row[r][c] = I[r+1][c] - I[r-1][c]` and `g_col[r][c] = I[r][c+1] - I[r][c-1]`.
//! The outermost rows (for `g_row`) and columns (for `g_col`) are zero.
use crate::hog_pipeline::grayscale::GrayImageF32;

/// Per-pixel derivatives along rows (vertical) and columns (horizontal).
#[derive(Debug, Clone)]
pub struct Gradient {
    pub g_row: GrayImageF32,
    pub g_col: GrayImageF32,
}

pub fn centred_gradient(image: &GrayImageF32) -> Gradient {
    let w = image.width;
    let h = image.height;
    let mut g_row = GrayImageF32::new(w, h);
    let mut g_col = GrayImageF32::new(w, h);

    for y in 1..h.saturating_sub(1) {
        let above = image.row(y - 1);
        let below = image.row(y + 1);
        for x in 0..w {
            *g_row.get_mut(x, y) = below[x] - above[x];
        }
    }

    for y in 0..h {
        let row = image.row(y);
        for x in 1..w.saturating_sub(1) {
            *g_col.get_mut(x, y) = row[x + 1] - row[x - 1];
        }
    }

    Gradient { g_row, g_col }
}
