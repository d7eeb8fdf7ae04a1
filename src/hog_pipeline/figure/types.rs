//! Figure and conversion configuration types

use crate::hog_pipeline::hog::HogParams;

/// PNG compression levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    /// Fast compression (larger file)
    Fast,
    /// Balanced (default)
    Default,
    /// Best compression (slower)
    Best,
}

/// Configuration for image to HOG figure conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// HOG extraction parameters
    pub hog: HogParams,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Blank border around the panels
    pub margin: u32,
    /// Blank space between the two panels
    pub gutter: u32,
    /// Canvas background colour
    pub background: [u8; 3],
    /// Heading above both panels; empty for none
    pub suptitle: String,
    /// Headings of the left (original) and right (HOG) panels; empty for none
    pub panel_titles: (String, String),
    /// PNG compression level
    pub compression: PngCompression,
    /// Whether to reject zero-sized input images before extraction
    pub validate_dimensions: bool,
    /// HOG magnitudes mapped onto the display range; values outside are clipped
    pub hog_display_range: (f32, f32),
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            hog: HogParams::default(),
            width: 1200,
            height: 600,
            margin: 24,
            gutter: 24,
            background: [255, 255, 255],
            suptitle: "HOG Feature Extraction (Histogram of Oriented Gradients)".to_string(),
            panel_titles: ("Original Image".to_string(), "HOG Visualization".to_string()),
            compression: PngCompression::Default,
            validate_dimensions: true,
            hog_display_range: (0.0, 10.0),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    hog: Option<HogParams>,
    canvas: Option<(u32, u32)>,
    margin: Option<u32>,
    gutter: Option<u32>,
    background: Option<[u8; 3]>,
    suptitle: Option<String>,
    panel_titles: Option<(String, String)>,
    compression: Option<PngCompression>,
    validate_dimensions: Option<bool>,
    hog_display_range: Option<(f32, f32)>,
}

impl ConversionConfigBuilder {
    pub fn hog(mut self, params: HogParams) -> Self {
        self.hog = Some(params);
        self
    }

    pub fn canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas = Some((width, height));
        self
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn gutter(mut self, gutter: u32) -> Self {
        self.gutter = Some(gutter);
        self
    }

    pub fn background(mut self, rgb: [u8; 3]) -> Self {
        self.background = Some(rgb);
        self
    }

    pub fn suptitle(mut self, title: impl Into<String>) -> Self {
        self.suptitle = Some(title.into());
        self
    }

    pub fn panel_titles(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.panel_titles = Some((left.into(), right.into()));
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn hog_display_range(mut self, lo: f32, hi: f32) -> Self {
        self.hog_display_range = Some((lo, hi));
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        let (width, height) = self.canvas.unwrap_or((default.width, default.height));
        ConversionConfig {
            hog: self.hog.unwrap_or(default.hog),
            width,
            height,
            margin: self.margin.unwrap_or(default.margin),
            gutter: self.gutter.unwrap_or(default.gutter),
            background: self.background.unwrap_or(default.background),
            suptitle: self.suptitle.unwrap_or(default.suptitle),
            panel_titles: self.panel_titles.unwrap_or(default.panel_titles),
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            hog_display_range: self.hog_display_range.unwrap_or(default.hog_display_range),
        }
    }
}
