//! Grayscale conversion module
//!
//! HOG is computed on a single channel; this module turns any decoded
//! raster into a floating-point luminance image of the same size.

pub mod luminance;
pub mod types;

pub use luminance::to_grayscale;
pub use types::GrayImageF32;
