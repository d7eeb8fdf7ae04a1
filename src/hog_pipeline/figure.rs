//! Figure rendering module
//!
//! This module composes the side-by-side comparison figure and writes it as PNG.

mod writer;
mod png_writer;
pub mod layout;
pub mod text;
pub mod types;

pub use writer::FigureWriter;
pub use png_writer::PngFigureWriter;
pub use layout::compose_side_by_side;
pub use types::{PngCompression, ConversionConfig, ConversionConfigBuilder};
