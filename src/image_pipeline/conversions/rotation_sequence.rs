use tracing::{info, instrument};
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    common::error::{RasterError, Result},
    common::timing::{PipelineTimings, Timer},
    conversions::types::RotationConfig,
    cylinder::{pixel_shift, rotate_cylinder},
    png::{PngWriter, StandardPngWriter},
    raster::{GrayRaster, create_marked_raster},
};

/// File name of the unrotated frame.
pub const INITIAL_FRAME_NAME: &str = "output.png";

/// File name of the rotated frame produced by iteration `index`.
pub fn rotated_frame_name(index: usize) -> String {
    format!("rotated_output_{index}.png")
}

/// Paths written by a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub initial: PathBuf,
    pub frames: Vec<PathBuf>,
    /// Columns moved per iteration
    pub pixel_shift: i64,
}

pub struct CylinderRotationPipeline<W: PngWriter> {
    writer: W,
    config: RotationConfig,
}

impl CylinderRotationPipeline<StandardPngWriter> {
    pub fn new(config: RotationConfig) -> Self {
        Self {
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<W: PngWriter> CylinderRotationPipeline<W> {
    pub fn with_custom(writer: W, config: RotationConfig) -> Self {
        Self { writer, config }
    }

    pub fn initial_raster(&self) -> Result<GrayRaster> {
        create_marked_raster(
            self.config.width,
            self.config.height,
            self.config.point_x,
            self.config.point_y,
        )
    }

    /// Columns each iteration moves the raster by.
    pub fn pixel_shift(&self) -> i64 {
        pixel_shift(&self.config.geometry(), self.config.rotation_angle)
    }

    /// The initial raster followed by one raster per iteration, without touching disk.
    pub fn frames(&self) -> Result<Vec<GrayRaster>> {
        let geometry = self.config.geometry();
        let mut frames = Vec::with_capacity(self.config.iterations + 1);
        frames.push(self.initial_raster()?);

        for _ in 0..self.config.iterations {
            let next = match frames.last() {
                Some(previous) => rotate_cylinder(previous, &geometry, self.config.rotation_angle),
                None => break,
            };
            frames.push(next);
        }

        Ok(frames)
    }

    /// Encodes `raster` into a new file at `path`.
    pub fn write_frame(&self, raster: &GrayRaster, path: &Path) -> Result<()> {
        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(path).map_err(|e| {
                RasterError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?
        };

        let _span = tracing::info_span!("encode_png", path = %path.display()).entered();
        self.writer.write_png(raster, &mut output_file, &self.config.png)
    }

    /// Writes the initial frame and every rotated frame into `output_dir`.
    ///
    /// Stops at the first failure; frames after it are never produced.
    #[instrument(skip(self, output_dir), fields(iterations = self.config.iterations))]
    pub fn run<P: AsRef<Path>>(&self, output_dir: P) -> Result<RunSummary> {
        let mut timings = PipelineTimings::new();
        self.execute(output_dir.as_ref(), &mut timings)
    }

    #[instrument(skip(self, output_dir), fields(iterations = self.config.iterations))]
    pub fn run_with_timings<P: AsRef<Path>>(
        &self,
        output_dir: P,
    ) -> Result<(RunSummary, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let summary = self.execute(output_dir.as_ref(), &mut timings)?;
        Ok((summary, timings))
    }

    fn execute(&self, output_dir: &Path, timings: &mut PipelineTimings) -> Result<RunSummary> {
        let geometry = self.config.geometry();
        info!(
            width = self.config.width,
            height = self.config.height,
            output = %output_dir.display(),
            "Starting cylinder rotation run"
        );

        let timer = Timer::start("create_raster");
        let mut current = self.initial_raster()?;
        timings.record(timer);

        let initial = output_dir.join(INITIAL_FRAME_NAME);
        let timer = Timer::start("write_frame");
        self.write_frame(&current, &initial)?;
        timings.record(timer);
        info!("Image saved successfully as {}", initial.display());

        let mut frames = Vec::with_capacity(self.config.iterations);
        for index in 0..self.config.iterations {
            let timer = Timer::start("rotate");
            let rotated = rotate_cylinder(&current, &geometry, self.config.rotation_angle);
            timings.record(timer);

            let path = output_dir.join(rotated_frame_name(index));
            let timer = Timer::start("write_frame");
            self.write_frame(&rotated, &path)?;
            timings.record(timer);

            frames.push(path);
            current = rotated;
        }

        let pixel_shift = self.pixel_shift();
        info!(
            "Rotated images saved successfully ({} frames, {} px per step)",
            frames.len(),
            pixel_shift
        );

        Ok(RunSummary {
            initial,
            frames,
            pixel_shift,
        })
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RotationConfig) {
        self.config = config;
    }
}
