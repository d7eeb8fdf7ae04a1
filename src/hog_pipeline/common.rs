//! Common utilities module
//!
//! This module contains shared utilities used across the HOG pipeline.

pub mod error;

pub use error::{HogError, Result};
