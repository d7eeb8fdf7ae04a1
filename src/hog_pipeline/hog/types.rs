//! HOG parameter and descriptor types

/// Block normalization methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockNorm {
    /// `v / (||v||_1 + eps)`
    L1,
    /// `sqrt(v / (||v||_1 + eps))`
    L1Sqrt,
    /// `v / sqrt(||v||_2^2 + eps^2)`
    L2,
    /// L2, clipped at 0.2, then L2 again (default)
    L2Hys,
}

/// Parameters for HOG extraction
#[derive(Debug, Clone)]
pub struct HogParams {
    /// Number of orientation bins over [0, 180) degrees
    pub orientations: usize,
    /// Cell size in pixels as (rows, cols)
    pub pixels_per_cell: (usize, usize),
    /// Block size in cells as (rows, cols)
    pub cells_per_block: (usize, usize),
    /// Normalization applied to each block
    pub block_norm: BlockNorm,
    /// Take the square root of each pixel before computing gradients
    pub transform_sqrt: bool,
}

impl Default for HogParams {
    fn default() -> Self {
        Self {
            orientations: 9,
            pixels_per_cell: (8, 8),
            cells_per_block: (2, 2),
            block_norm: BlockNorm::L2Hys,
            transform_sqrt: false,
        }
    }
}

impl HogParams {
    pub fn builder() -> HogParamsBuilder {
        HogParamsBuilder::default()
    }
}

/// Builder for HogParams
#[derive(Default)]
pub struct HogParamsBuilder {
    orientations: Option<usize>,
    pixels_per_cell: Option<(usize, usize)>,
    cells_per_block: Option<(usize, usize)>,
    block_norm: Option<BlockNorm>,
    transform_sqrt: Option<bool>,
}

impl HogParamsBuilder {
    pub fn orientations(mut self, orientations: usize) -> Self {
        self.orientations = Some(orientations);
        self
    }

    pub fn pixels_per_cell(mut self, rows: usize, cols: usize) -> Self {
        self.pixels_per_cell = Some((rows, cols));
        self
    }

    pub fn cells_per_block(mut self, rows: usize, cols: usize) -> Self {
        self.cells_per_block = Some((rows, cols));
        self
    }

    pub fn block_norm(mut self, norm: BlockNorm) -> Self {
        self.block_norm = Some(norm);
        self
    }

    pub fn transform_sqrt(mut self, enable: bool) -> Self {
        self.transform_sqrt = Some(enable);
        self
    }

    pub fn build(self) -> HogParams {
        let default = HogParams::default();
        HogParams {
            orientations: self.orientations.unwrap_or(default.orientations),
            pixels_per_cell: self.pixels_per_cell.unwrap_or(default.pixels_per_cell),
            cells_per_block: self.cells_per_block.unwrap_or(default.cells_per_block),
            block_norm: self.block_norm.unwrap_or(default.block_norm),
            transform_sqrt: self.transform_sqrt.unwrap_or(default.transform_sqrt),
        }
    }
}

/// Flattened HOG feature vector.
///
/// Layout is `(block_row, block_col, cell_row, cell_col, orientation)`,
/// last index fastest.
#[derive(Debug, Clone)]
pub struct HogDescriptor {
    pub features: Vec<f32>,
    pub n_blocks_row: usize,
    pub n_blocks_col: usize,
    pub cells_per_block: (usize, usize),
    pub orientations: usize,
}

impl HogDescriptor {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Shape of the feature vector, always one-dimensional.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.features.len()]
    }

    pub fn block_len(&self) -> usize {
        self.cells_per_block.0 * self.cells_per_block.1 * self.orientations
    }

    /// Normalized values of one block.
    pub fn block(&self, row: usize, col: usize) -> &[f32] {
        let len = self.block_len();
        let start = (row * self.n_blocks_col + col) * len;
        &self.features[start..start + len]
    }
}
