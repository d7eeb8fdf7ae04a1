//! Histogram of Oriented Gradients
//!
//! Dalal-Triggs style HOG on a single channel image:
//!
//! 1. optional power-law (square root) compression
//! 2. centred-difference gradients
//! 3. per-cell histograms of unsigned gradient orientation, weighted by magnitude
//! 4. overlapping block normalization, flattened into one feature vector
//!
//! The extractor can also render the per-cell histograms as a "star" image
//! for visual inspection.

pub mod extractor;
pub mod gradient;
pub mod histogram;
pub mod normalize;
pub mod types;
pub mod visualize;

pub use extractor::HogExtractor;
pub use types::{BlockNorm, HogDescriptor, HogParams, HogParamsBuilder};
