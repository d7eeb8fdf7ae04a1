use hog_features_rs::hog_pipeline::{ConversionConfig, HogParams, ImageToHogPipeline, RunOutcome};
use hog_features_rs::logger;

use tracing::info;

const IMAGE_FILENAME: &str = "carmel.jpg";
const RESULT_FILENAME: &str = "resultado_hog.png";

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting HOG feature extraction...");

    let config = ConversionConfig::builder()
        .hog(
            HogParams::builder()
                .orientations(9)
                .pixels_per_cell(8, 8)
                .cells_per_block(2, 2)
                .build(),
        )
        .build();
    let pipeline = ImageToHogPipeline::new(config)?;

    info!("HOG pipeline initialized");
    info!("HOG parameters: {:?}", pipeline.config().hog);

    let mut console = std::io::stdout().lock();
    match pipeline.run(IMAGE_FILENAME, RESULT_FILENAME, &mut console)? {
        RunOutcome::Saved { output, .. } => info!("Figure written to {}", output.display()),
        RunOutcome::InputMissing(_) => info!("Nothing to do without an input image"),
    }

    Ok(())
}
