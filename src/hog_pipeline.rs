//! HOG feature extraction pipeline module
//!
//! This module provides a structured approach to computing and visualizing
//! HOG descriptors, with separate modules for image decoding, grayscale
//! conversion, feature extraction, figure rendering and orchestration.

pub mod source;
pub mod grayscale;
pub mod hog;
pub mod exposure;
pub mod figure;
pub mod conversions;
pub mod common;

pub use common::{
    HogError,
    Result,
};

pub use source::{
    SourceImage,
    ImageReader,
    StandardImageReader,
};

pub use grayscale::GrayImageF32;

pub use hog::{
    BlockNorm,
    HogDescriptor,
    HogExtractor,
    HogParams,
    HogParamsBuilder,
};

pub use figure::{
    PngCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    FigureWriter,
    PngFigureWriter,
};

pub use conversions::{
    HogReport,
    ImageToHogPipeline,
    RunOutcome,
};
