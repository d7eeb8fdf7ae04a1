use tracing::{info, instrument, warn};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::hog_pipeline::{
    common::error::{HogError, Result},
    conversions::report::{HogReport, RunOutcome, print_image_shapes, print_missing_input},
    exposure::rescale_intensity,
    figure::{ConversionConfig, FigureWriter, PngFigureWriter, compose_side_by_side},
    grayscale::to_grayscale,
    hog::HogExtractor,
    source::{ImageReader, StandardImageReader},
};

pub struct ImageToHogPipeline<R: ImageReader, W: FigureWriter> {
    reader: R,
    writer: W,
    extractor: HogExtractor,
    config: ConversionConfig,
}

impl ImageToHogPipeline<StandardImageReader, PngFigureWriter> {
    pub fn new(config: ConversionConfig) -> Result<Self> {
        Self::with_custom(StandardImageReader, PngFigureWriter, config)
    }
}

impl<R: ImageReader, W: FigureWriter> ImageToHogPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Result<Self> {
        let extractor = HogExtractor::new(config.hog.clone())?;
        Ok(Self {
            reader,
            writer,
            extractor,
            config,
        })
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(HogError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decodes `input_data`, extracts HOG features and writes the comparison
    /// figure to `output`.
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<HogReport> {
        self.convert_reporting(input_data, output, &mut std::io::sink())
    }

    /// Like [`convert`](Self::convert), printing the input and grayscale
    /// shapes to `console` as soon as they are known, before extraction.
    #[instrument(skip(self, input_data, output, console), fields(input_size = input_data.len()))]
    fn convert_reporting(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
        console: &mut dyn Write,
    ) -> Result<HogReport> {
        info!("Starting HOG extraction");

        let source = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = source.width(),
                height = source.height()
            ).entered();
            self.validate_dimensions(source.width(), source.height())?;
        }

        let gray = {
            let _span = tracing::info_span!("grayscale").entered();
            to_grayscale(&source.image)
        };
        print_image_shapes(&source.shape(), gray.shape(), console)?;

        let (descriptor, hog_image) = {
            let _span = tracing::info_span!("extract_hog").entered();
            self.extractor.extract_with_visualization(&gray)?
        };

        let figure = {
            let _span = tracing::info_span!("compose_figure").entered();
            let (lo, hi) = self.config.hog_display_range;
            let hog_rescaled = rescale_intensity(&hog_image, (lo, hi));
            compose_side_by_side(&source.image, &hog_rescaled, &self.config)?
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_figure(&figure, output, &self.config)?;
        }

        info!(
            width = source.width(),
            height = source.height(),
            features = descriptor.len(),
            "Extraction complete"
        );

        Ok(HogReport {
            image_shape: source.shape(),
            gray_shape: gray.shape(),
            descriptor_shape: descriptor.shape(),
            descriptor_len: descriptor.len(),
        })
    }

    /// Converts `input_path` into a figure at `output_path`.
    ///
    /// The output file is only created once the figure has been encoded, so
    /// a missing or undecodable input leaves the filesystem untouched.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<HogReport> {
        self.convert_file_reporting(input_path.as_ref(), output_path.as_ref(), &mut std::io::sink())
    }

    #[instrument(skip(self, input_path, output_path, console))]
    fn convert_file_reporting(
        &self,
        input_path: &Path,
        output_path: &Path,
        console: &mut dyn Write,
    ) -> Result<HogReport> {
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => HogError::InputNotFound(input_path.to_path_buf()),
                _ => HogError::InputReadError(format!("{}: {}", input_path.display(), e)),
            })?
        };

        let mut encoded = Vec::new();
        let report = self.convert_reporting(&input_data, &mut encoded, console)?;

        {
            let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                HogError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(report)
    }

    /// Runs one conversion and reports to `console`.
    ///
    /// The input and grayscale shapes are printed before extraction, so they
    /// still show when extraction later fails. A missing input is not an
    /// error: the user gets instructions and [`RunOutcome::InputMissing`] is
    /// returned. Every other failure propagates.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        console: &mut dyn Write,
    ) -> Result<RunOutcome> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        match self.convert_file_reporting(input_path, output_path, console) {
            Ok(report) => {
                report.print_summary(output_path, console)?;
                Ok(RunOutcome::Saved {
                    report,
                    output: output_path.to_path_buf(),
                })
            }
            Err(HogError::InputNotFound(path)) => {
                warn!(input = %path.display(), "Input image not found");
                print_missing_input(&path, console)?;
                Ok(RunOutcome::InputMissing(path))
            }
            Err(e) => Err(e),
        }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) -> Result<()> {
        self.extractor = HogExtractor::new(config.hog.clone())?;
        self.config = config;
        Ok(())
    }
}
