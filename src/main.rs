use anyhow::Context;
use cylinder_shift_rs::image_pipeline::{CylinderRotationPipeline, RotationConfig};
use cylinder_shift_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting cylinder_shift...");

    let config = RotationConfig::default();
    let pipeline = CylinderRotationPipeline::new(config);

    info!(
        "Raster: {}x{}, mark at ({}, {})",
        pipeline.config().width,
        pipeline.config().height,
        pipeline.config().point_x,
        pipeline.config().point_y
    );
    info!(
        "Cylinder: {} mm diameter, ratio {}, {} deg x {} steps",
        pipeline.config().diameter_mm,
        pipeline.config().mm_to_pixel_ratio,
        pipeline.config().rotation_angle,
        pipeline.config().iterations
    );

    match pipeline.run_with_timings(".") {
        Ok((_summary, timings)) => {
            timings.log_summary();
            Ok(())
        }
        Err(e) => {
            error!("Rotation run failed: {}", e);
            Err(e).context("cylinder rotation run failed")
        }
    }
}
