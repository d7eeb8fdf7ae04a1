//! Pipeline conversions module
//!
//! This module contains the orchestration logic that turns an image file into
//! a HOG comparison figure.

mod image_to_hog;
mod report;


pub use image_to_hog::ImageToHogPipeline;
pub use report::{HogReport, RunOutcome, format_shape};
