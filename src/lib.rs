pub mod hog_pipeline;
pub mod logger;
