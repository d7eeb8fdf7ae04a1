use tracing::{debug, info, instrument};

use crate::hog_pipeline::common::error::{HogError, Result};
use crate::hog_pipeline::grayscale::GrayImageF32;
use crate::hog_pipeline::hog::gradient::centred_gradient;
use crate::hog_pipeline::hog::histogram::{CellHistograms, cell_histograms};
use crate::hog_pipeline::hog::normalize::normalize_blocks;
use crate::hog_pipeline::hog::types::{HogDescriptor, HogParams};
use crate::hog_pipeline::hog::visualize::render_hog_image;

pub struct HogExtractor {
    params: HogParams,
}

impl HogExtractor {
    /// Creates an extractor after checking that every size parameter is non-zero.
    pub fn new(params: HogParams) -> Result<Self> {
        if params.orientations == 0 {
            return Err(HogError::InvalidParameters(
                "orientations must be at least 1".to_string(),
            ));
        }
        let (cell_rows, cell_cols) = params.pixels_per_cell;
        if cell_rows == 0 || cell_cols == 0 {
            return Err(HogError::InvalidParameters(format!(
                "pixels_per_cell must be positive, got ({cell_rows}, {cell_cols})"
            )));
        }
        let (block_rows, block_cols) = params.cells_per_block;
        if block_rows == 0 || block_cols == 0 {
            return Err(HogError::InvalidParameters(format!(
                "cells_per_block must be positive, got ({block_rows}, {block_cols})"
            )));
        }
        Ok(Self { params })
    }

    /// Computes the HOG feature vector.
    pub fn extract(&self, image: &GrayImageF32) -> Result<HogDescriptor> {
        let histograms = self.histograms(image)?;
        Ok(self.descriptor(&histograms))
    }

    /// Computes the HOG feature vector and the star-glyph rendering of the
    /// cell histograms, the latter with the input's shape.
    #[instrument(skip_all, fields(width = image.width, height = image.height))]
    pub fn extract_with_visualization(
        &self,
        image: &GrayImageF32,
    ) -> Result<(HogDescriptor, GrayImageF32)> {
        let histograms = self.histograms(image)?;

        let hog_image = {
            let _span = tracing::debug_span!("render_hog_image").entered();
            render_hog_image(
                &histograms,
                self.params.pixels_per_cell,
                image.width,
                image.height,
            )
        };

        Ok((self.descriptor(&histograms), hog_image))
    }

    fn histograms(&self, image: &GrayImageF32) -> Result<CellHistograms> {
        let (cell_rows, cell_cols) = self.params.pixels_per_cell;
        let (block_rows, block_cols) = self.params.cells_per_block;

        let n_cells_row = image.height / cell_rows;
        let n_cells_col = image.width / cell_cols;
        if n_cells_row < block_rows || n_cells_col < block_cols {
            return Err(HogError::ImageTooSmall {
                min_rows: block_rows * cell_rows,
                min_cols: block_cols * cell_cols,
            });
        }

        let compressed;
        let source = if self.params.transform_sqrt {
            compressed = GrayImageF32 {
                width: image.width,
                height: image.height,
                data: image.data.iter().map(|v| v.sqrt()).collect(),
            };
            &compressed
        } else {
            image
        };

        let gradient = {
            let _span = tracing::debug_span!("gradient").entered();
            centred_gradient(source)
        };

        let _span = tracing::debug_span!("cell_histograms", n_cells_row, n_cells_col).entered();
        Ok(cell_histograms(
            &gradient,
            self.params.pixels_per_cell,
            self.params.orientations,
        ))
    }

    fn descriptor(&self, histograms: &CellHistograms) -> HogDescriptor {
        let _span = tracing::debug_span!("normalize_blocks").entered();
        let (features, n_blocks_row, n_blocks_col) = normalize_blocks(
            histograms,
            self.params.cells_per_block,
            self.params.block_norm,
        );
        debug!(
            "Normalized {}x{} blocks with {:?}",
            n_blocks_row, n_blocks_col, self.params.block_norm
        );
        info!(features = features.len(), "HOG extraction complete");

        HogDescriptor {
            features,
            n_blocks_row,
            n_blocks_col,
            cells_per_block: self.params.cells_per_block,
            orientations: self.params.orientations,
        }
    }
}
