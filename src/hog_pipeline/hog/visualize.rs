//! Star-glyph rendering of cell histograms.
//!
//! Every cell gets one line segment per orientation bin, centred in the
//! cell and drawn perpendicular to the bin's mid-angle (the edge direction
//! rather than the gradient direction). Each pixel on a segment accumulates
//! that bin's histogram value, so strong bins show up bright.
use crate::hog_pipeline::grayscale::GrayImageF32;
use crate::hog_pipeline::hog::histogram::CellHistograms;

/// Pixel coordinates of the digital line from `(r0, c0)` to `(r1, c1)`,
/// both endpoints included (Bresenham).
pub fn line_pixels(r0: i64, c0: i64, r1: i64, c1: i64) -> Vec<(i64, i64)> {
    let mut r = r0;
    let mut c = c0;
    let mut dr = (r1 - r0).abs();
    let mut dc = (c1 - c0).abs();
    let mut sr = if r1 - r > 0 { 1 } else { -1 };
    let mut sc = if c1 - c > 0 { 1 } else { -1 };

    let steep = dr > dc;
    if steep {
        std::mem::swap(&mut r, &mut c);
        std::mem::swap(&mut dr, &mut dc);
        std::mem::swap(&mut sr, &mut sc);
    }

    let mut d = 2 * dr - dc;
    let mut pixels = Vec::with_capacity(dc as usize + 1);
    for _ in 0..dc {
        pixels.push(if steep { (c, r) } else { (r, c) });
        while d >= 0 {
            r += sr;
            d -= 2 * dc;
        }
        c += sc;
        d += 2 * dr;
    }
    pixels.push((r1, c1));
    pixels
}

/// Renders the histograms into an image of `width x height`.
pub fn render_hog_image(
    histograms: &CellHistograms,
    pixels_per_cell: (usize, usize),
    width: usize,
    height: usize,
) -> GrayImageF32 {
    let (cell_rows, cell_cols) = pixels_per_cell;
    let mut out = GrayImageF32::new(width, height);

    let radius = (cell_rows.min(cell_cols) / 2) as f64 - 1.0;
    let n = histograms.orientations;
    let offsets: Vec<(f64, f64)> = (0..n)
        .map(|o| {
            let mid = std::f64::consts::PI * (o as f64 + 0.5) / n as f64;
            (radius * mid.sin(), radius * mid.cos())
        })
        .collect();

    for r in 0..histograms.n_cells_row {
        for c in 0..histograms.n_cells_col {
            let centre_r = (r * cell_rows + cell_rows / 2) as f64;
            let centre_c = (c * cell_cols + cell_cols / 2) as f64;
            for (o, &(dr, dc)) in offsets.iter().enumerate() {
                let value = histograms.get(r, c, o);
                let segment = line_pixels(
                    (centre_r - dc) as i64,
                    (centre_c + dr) as i64,
                    (centre_r + dc) as i64,
                    (centre_c - dr) as i64,
                );
                for (pr, pc) in segment {
                    if pr < 0 || pc < 0 || pr as usize >= height || pc as usize >= width {
                        continue;
                    }
                    *out.get_mut(pc as usize, pr as usize) += value;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hog_pipeline::hog::gradient::Gradient;
    use crate::hog_pipeline::hog::histogram::cell_histograms;

    #[test]
    fn test_line_endpoints_included() {
        let pixels = line_pixels(1, 1, 1, 5);
        assert_eq!(pixels, vec![(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)]);
    }

    #[test]
    fn test_steep_line() {
        let pixels = line_pixels(0, 0, 3, 1);
        assert_eq!(pixels.len(), 4);
        assert_eq!(pixels[0], (0, 0));
        assert_eq!(pixels[3], (3, 1));
        assert!(pixels.windows(2).all(|p| p[1].0 == p[0].0 + 1));
    }

    #[test]
    fn test_single_point_line() {
        assert_eq!(line_pixels(2, 3, 2, 3), vec![(2, 3)]);
    }

    #[test]
    fn test_horizontal_gradient_draws_vertical_edge() {
        // Gradient along columns (0 degrees) means a vertical edge; the
        // bin-0 glyph is almost vertical.
        let grad = Gradient {
            g_row: GrayImageF32::new(8, 8),
            g_col: GrayImageF32::from_fn(8, 8, |_, _| 1.0),
        };
        let hist = cell_histograms(&grad, (8, 8), 9);
        let img = render_hog_image(&hist, (8, 8), 8, 8);

        assert_eq!(img.shape(), (8, 8));
        // bin 0 glyph runs from (row 1, col 4) to (row 6, col 3)
        assert!(img.get(4, 1) > 0.0);
        assert!(img.get(3, 4) > 0.0);
        assert!(img.get(3, 6) > 0.0);
        assert_eq!(img.get(1, 4), 0.0);
        let total: f32 = img.data.iter().sum();
        assert!((total - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_histograms_render_black() {
        let grad = Gradient {
            g_row: GrayImageF32::new(16, 16),
            g_col: GrayImageF32::new(16, 16),
        };
        let hist = cell_histograms(&grad, (8, 8), 9);
        let img = render_hog_image(&hist, (8, 8), 16, 16);
        assert!(img.data.iter().all(|&v| v == 0.0));
    }
}
