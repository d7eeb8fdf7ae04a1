//! Per-cell orientation histograms.
//!
//! Orientation is unsigned, `atan2(g_row, g_col)` folded into [0, 180)
//! degrees. Bin `i` covers `[180 i / n, 180 (i + 1) / n)`. Each bin holds the
//! gradient magnitude summed over the cell, divided by the cell area. Pixels
//! beyond the last whole cell are ignored.
use crate::hog_pipeline::hog::gradient::Gradient;

/// Histograms for a `n_cells_row x n_cells_col` grid of cells.
#[derive(Debug, Clone)]
pub struct CellHistograms {
    pub n_cells_row: usize,
    pub n_cells_col: usize,
    pub orientations: usize,
    data: Vec<f32>,
}

impl CellHistograms {
    /// Histogram of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> &[f32] {
        let start = (row * self.n_cells_col + col) * self.orientations;
        &self.data[start..start + self.orientations]
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize, orientation: usize) -> f32 {
        self.cell(row, col)[orientation]
    }
}

/// Bin index of an orientation in degrees, `None` when it falls outside
/// every half-open bin (e.g. rounding landed exactly on 180).
fn orientation_bin(degrees: f64, bounds: &[f64]) -> Option<usize> {
    bounds
        .windows(2)
        .position(|edge| degrees >= edge[0] && degrees < edge[1])
}

pub fn cell_histograms(
    gradient: &Gradient,
    pixels_per_cell: (usize, usize),
    orientations: usize,
) -> CellHistograms {
    let (cell_rows, cell_cols) = pixels_per_cell;
    let w = gradient.g_col.width;
    let h = gradient.g_col.height;
    let n_cells_row = h / cell_rows;
    let n_cells_col = w / cell_cols;

    let step = 180.0 / orientations as f64;
    let bounds: Vec<f64> = (0..=orientations).map(|i| step * i as f64).collect();

    let mut sums = vec![0.0f64; n_cells_row * n_cells_col * orientations];

    for y in 0..n_cells_row * cell_rows {
        let r = y / cell_rows;
        let g_row = gradient.g_row.row(y);
        let g_col = gradient.g_col.row(y);
        for x in 0..n_cells_col * cell_cols {
            let gr = g_row[x] as f64;
            let gc = g_col[x] as f64;
            let magnitude = gc.hypot(gr);
            let degrees = gr.atan2(gc).to_degrees().rem_euclid(180.0);
            if let Some(bin) = orientation_bin(degrees, &bounds) {
                let c = x / cell_cols;
                sums[(r * n_cells_col + c) * orientations + bin] += magnitude;
            }
        }
    }

    let area = (cell_rows * cell_cols) as f64;
    CellHistograms {
        n_cells_row,
        n_cells_col,
        orientations,
        data: sums.into_iter().map(|s| (s / area) as f32).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hog_pipeline::grayscale::GrayImageF32;

    fn gradient_from(g_row: f32, g_col: f32, w: usize, h: usize) -> Gradient {
        Gradient {
            g_row: GrayImageF32::from_fn(w, h, |_, _| g_row),
            g_col: GrayImageF32::from_fn(w, h, |_, _| g_col),
        }
    }

    #[test]
    fn test_horizontal_gradient_lands_in_first_bin() {
        let grad = gradient_from(0.0, 2.0, 8, 8);
        let hist = cell_histograms(&grad, (8, 8), 9);

        assert_eq!(hist.n_cells_row, 1);
        assert_eq!(hist.n_cells_col, 1);
        assert!((hist.get(0, 0, 0) - 2.0).abs() < 1e-6);
        assert!(hist.cell(0, 0)[1..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_vertical_gradient_lands_in_middle_bin() {
        // 90 degrees sits in [80, 100)
        let grad = gradient_from(1.0, 0.0, 4, 4);
        let hist = cell_histograms(&grad, (4, 4), 9);
        assert!((hist.get(0, 0, 4) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orientation_is_unsigned() {
        let pos = cell_histograms(&gradient_from(1.0, 1.0, 4, 4), (4, 4), 9);
        let neg = cell_histograms(&gradient_from(-1.0, -1.0, 4, 4), (4, 4), 9);
        assert_eq!(pos.cell(0, 0), neg.cell(0, 0));
        // 45 degrees sits in [40, 60)
        assert!(pos.get(0, 0, 2) > 0.0);
    }

    #[test]
    fn test_partial_cells_are_dropped() {
        let grad = gradient_from(0.0, 1.0, 19, 10);
        let hist = cell_histograms(&grad, (8, 8), 9);
        assert_eq!(hist.n_cells_row, 1);
        assert_eq!(hist.n_cells_col, 2);
    }

    #[test]
    fn test_cell_average_uses_cell_area() {
        let mut grad = gradient_from(0.0, 0.0, 4, 4);
        *grad.g_col.get_mut(1, 1) = 8.0;
        let hist = cell_histograms(&grad, (4, 4), 9);
        assert!((hist.get(0, 0, 0) - 0.5).abs() < 1e-6);
    }
}
