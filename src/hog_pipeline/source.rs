//! Source image reading module
//!
//! This module provides format-agnostic image decoding for the HOG pipeline.

mod reader;
mod image_reader;
pub mod types;

pub use reader::ImageReader;
pub use image_reader::StandardImageReader;
pub use types::SourceImage;
