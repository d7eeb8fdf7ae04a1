//! Block normalization.
use crate::hog_pipeline::hog::histogram::CellHistograms;
use crate::hog_pipeline::hog::types::BlockNorm;

const EPS: f32 = 1e-5;

/// Clip level between the two L2 passes of L2-Hys.
const HYS_CLIP: f32 = 0.2;

fn l2_normalize(block: &mut [f32]) {
    let norm = (block.iter().map(|v| v * v).sum::<f32>() + EPS * EPS).sqrt();
    block.iter_mut().for_each(|v| *v /= norm);
}

/// Normalizes one block in place.
pub fn normalize_block(block: &mut [f32], method: BlockNorm) {
    match method {
        BlockNorm::L1 => {
            let norm = block.iter().map(|v| v.abs()).sum::<f32>() + EPS;
            block.iter_mut().for_each(|v| *v /= norm);
        }
        BlockNorm::L1Sqrt => {
            let norm = block.iter().map(|v| v.abs()).sum::<f32>() + EPS;
            block.iter_mut().for_each(|v| *v = (*v / norm).sqrt());
        }
        BlockNorm::L2 => l2_normalize(block),
        BlockNorm::L2Hys => {
            l2_normalize(block);
            block.iter_mut().for_each(|v| *v = v.min(HYS_CLIP));
            l2_normalize(block);
        }
    }
}

/// Slides a `cells_per_block` window one cell at a time over the histogram
/// grid and appends each normalized block to a flat feature vector.
///
/// The caller guarantees the grid holds at least one block.
pub fn normalize_blocks(
    histograms: &CellHistograms,
    cells_per_block: (usize, usize),
    method: BlockNorm,
) -> (Vec<f32>, usize, usize) {
    let (b_row, b_col) = cells_per_block;
    let n_blocks_row = histograms.n_cells_row + 1 - b_row;
    let n_blocks_col = histograms.n_cells_col + 1 - b_col;
    let block_len = b_row * b_col * histograms.orientations;

    let mut features = Vec::with_capacity(n_blocks_row * n_blocks_col * block_len);
    let mut block = Vec::with_capacity(block_len);

    for r in 0..n_blocks_row {
        for c in 0..n_blocks_col {
            block.clear();
            for cr in r..r + b_row {
                for cc in c..c + b_col {
                    block.extend_from_slice(histograms.cell(cr, cc));
                }
            }
            normalize_block(&mut block, method);
            features.extend_from_slice(&block);
        }
    }

    (features, n_blocks_row, n_blocks_col)
}
