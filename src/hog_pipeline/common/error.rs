use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HogError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to load title font: {0}")]
    FontError(String),

    #[error("Invalid HOG parameters: {0}")]
    InvalidParameters(String),

    #[error(
        "The input image is too small given the values of pixels_per_cell and cells_per_block. \
         It should have at least: {min_rows} rows and {min_cols} cols."
    )]
    ImageTooSmall { min_rows: usize, min_cols: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HogError>;
