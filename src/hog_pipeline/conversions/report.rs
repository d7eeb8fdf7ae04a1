use std::io::Write;
use std::path::{Path, PathBuf};

use crate::hog_pipeline::common::error::Result;

/// What a successful conversion measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HogReport {
    /// Shape of the decoded input, `[rows, cols]` or `[rows, cols, channels]`
    pub image_shape: Vec<usize>,
    /// `(rows, cols)` of the grayscale image fed to the extractor
    pub gray_shape: (usize, usize),
    /// Shape of the feature vector
    pub descriptor_shape: Vec<usize>,
    /// Number of features
    pub descriptor_len: usize,
}

/// Result of [`ImageToHogPipeline::run`](super::ImageToHogPipeline::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Figure written to `output`
    Saved { report: HogReport, output: PathBuf },
    /// Input file absent; nothing was written
    InputMissing(PathBuf),
}

/// Tuple-style shape, e.g. `(480, 640, 3)` or `(3780,)`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({single},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Prints the decoded and grayscale shapes. Runs before extraction.
pub(crate) fn print_image_shapes(
    image_shape: &[usize],
    gray_shape: (usize, usize),
    console: &mut dyn Write,
) -> Result<()> {
    writeln!(console, "Original image loaded: {}", format_shape(image_shape))?;
    writeln!(
        console,
        "Converted to grayscale: {}",
        format_shape(&[gray_shape.0, gray_shape.1])
    )?;
    Ok(())
}

impl HogReport {
    /// Prints where the figure went and what was extracted.
    pub fn print_summary(&self, output_path: &Path, console: &mut dyn Write) -> Result<()> {
        writeln!(console)?;
        writeln!(console, "Result image saved as '{}'", output_path.display())?;
        writeln!(
            console,
            "HOG feature vector shape (fd): {}",
            format_shape(&self.descriptor_shape)
        )?;
        writeln!(
            console,
            "Total number of HOG features extracted: {}",
            self.descriptor_len
        )?;
        Ok(())
    }
}

/// Tells the user which file to provide.
pub(crate) fn print_missing_input(input_path: &Path, console: &mut dyn Write) -> Result<()> {
    let file_name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.display().to_string());
    writeln!(console, "Error: file '{}' not found.", input_path.display())?;
    writeln!(
        console,
        "Please download an image of your choice (e.g. from Pexels or Unsplash)"
    )?;
    writeln!(
        console,
        "and save it next to this program with the name '{file_name}'."
    )?;
    Ok(())
}
