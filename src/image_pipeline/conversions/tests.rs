use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::image_pipeline::common::error::{RasterError, Result};
use crate::image_pipeline::conversions::rotation_sequence::{
    CylinderRotationPipeline, INITIAL_FRAME_NAME, rotated_frame_name,
};
use crate::image_pipeline::conversions::types::RotationConfig;
use crate::image_pipeline::png::{PngCompression, PngFilter, PngOptions, PngWriter};
use crate::image_pipeline::raster::{GrayRaster, MARK_INTENSITY};

struct MockWriter {
    /// Zero-based call index that fails, if any
    fail_on: Option<usize>,
    written: Arc<Mutex<Vec<GrayRaster>>>,
}

impl PngWriter for MockWriter {
    fn write_png(&self, raster: &GrayRaster, _output: &mut dyn Write, _options: &PngOptions) -> Result<()> {
        let mut written = self.written.lock().unwrap();
        if self.fail_on == Some(written.len()) {
            return Err(RasterError::EncodeError("Mock encode error".to_string()));
        }
        written.push(raster.clone());
        Ok(())
    }
}

fn mock_pipeline(
    fail_on: Option<usize>,
    config: RotationConfig,
) -> (CylinderRotationPipeline<MockWriter>, Arc<Mutex<Vec<GrayRaster>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter { fail_on, written: written.clone() };
    (CylinderRotationPipeline::with_custom(writer, config), written)
}

fn marked_column(raster: &GrayRaster) -> Option<usize> {
    (0..raster.width()).find(|&x| raster.get(x, 0) == MARK_INTENSITY)
}

#[test]
fn test_default_config_matches_reference_run() {
    let config = RotationConfig::default();

    assert_eq!((config.width, config.height), (10, 10));
    assert_eq!((config.point_x, config.point_y), (9, 0));
    assert_eq!(config.mm_to_pixel_ratio, 0.5);
    assert_eq!(config.diameter_mm, 8.0);
    assert_eq!(config.rotation_angle, 45.0);
    assert_eq!(config.iterations, 10);
}

#[test]
fn test_config_builder() {
    let config = RotationConfig::builder()
        .dimensions(32, 8)
        .point(4, 7)
        .mm_to_pixel_ratio(2.0)
        .diameter_mm(20.0)
        .rotation_angle(-30.0)
        .iterations(3)
        .compression(PngCompression::Best)
        .filter(PngFilter::Sub)
        .build();

    assert_eq!((config.width, config.height), (32, 8));
    assert_eq!((config.point_x, config.point_y), (4, 7));
    assert_eq!(config.mm_to_pixel_ratio, 2.0);
    assert_eq!(config.diameter_mm, 20.0);
    assert_eq!(config.rotation_angle, -30.0);
    assert_eq!(config.iterations, 3);
    assert_eq!(config.png.compression, PngCompression::Best);
    assert_eq!(config.png.filter, PngFilter::Sub);
}

#[test]
fn test_builder_keeps_defaults_for_unset_fields() {
    let config = RotationConfig::builder().iterations(4).build();

    assert_eq!(config.iterations, 4);
    assert_eq!(config.diameter_mm, RotationConfig::default().diameter_mm);
    assert_eq!(config.png, PngOptions::default());
}

#[test]
fn test_frames_move_mark_one_column_per_step() {
    let pipeline = CylinderRotationPipeline::new(RotationConfig::default());
    let frames = pipeline.frames().unwrap();

    assert_eq!(pipeline.pixel_shift(), 1);
    assert_eq!(frames.len(), 11);
    for (step, frame) in frames.iter().enumerate() {
        assert_eq!(marked_column(frame), Some((9 + step) % 10), "step {step}");
    }
    assert_eq!(frames[10], frames[0]);
}

#[test]
fn test_each_frame_preserves_histogram() {
    let pipeline = CylinderRotationPipeline::new(RotationConfig::default());
    let frames = pipeline.frames().unwrap();

    for frame in &frames[1..] {
        assert_eq!(frame.histogram(), frames[0].histogram());
    }
}

#[test]
fn test_successful_run_writes_every_frame() {
    let dir = tempfile::tempdir().unwrap();
    let (pipeline, written) = mock_pipeline(None, RotationConfig::default());

    let summary = pipeline.run(dir.path()).unwrap();

    assert_eq!(summary.initial, dir.path().join(INITIAL_FRAME_NAME));
    assert_eq!(summary.frames.len(), 10);
    assert_eq!(summary.frames[3], dir.path().join("rotated_output_3.png"));
    assert_eq!(summary.pixel_shift, 1);

    let written = written.lock().unwrap();
    assert_eq!(written.len(), 11);
    assert_eq!(marked_column(&written[0]), Some(9));
    assert_eq!(marked_column(&written[1]), Some(0));
}

#[test]
fn test_out_of_bounds_point_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = RotationConfig::builder().point(10, 0).build();
    let (pipeline, written) = mock_pipeline(None, config);

    let result = pipeline.run(dir.path());

    assert!(matches!(
        result.unwrap_err(),
        RasterError::PointOutOfBounds { x: 10, y: 0, .. }
    ));
    assert!(written.lock().unwrap().is_empty());
    assert!(!dir.path().join(INITIAL_FRAME_NAME).exists());
}

#[test]
fn test_writer_failure_halts_run() {
    let dir = tempfile::tempdir().unwrap();
    let (pipeline, written) = mock_pipeline(Some(3), RotationConfig::default());

    let result = pipeline.run(dir.path());

    assert!(matches!(result.unwrap_err(), RasterError::EncodeError(_)));
    assert_eq!(written.lock().unwrap().len(), 3);
    assert!(!dir.path().join(rotated_frame_name(3)).exists());
}

#[test]
fn test_missing_output_dir_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let (pipeline, written) = mock_pipeline(None, RotationConfig::default());

    let result = pipeline.run(&missing);

    assert!(matches!(result.unwrap_err(), RasterError::OutputWriteError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_zero_iterations_writes_only_initial_frame() {
    let dir = tempfile::tempdir().unwrap();
    let config = RotationConfig::builder().iterations(0).build();
    let (pipeline, written) = mock_pipeline(None, config);

    let summary = pipeline.run(dir.path()).unwrap();

    assert!(summary.frames.is_empty());
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_run_with_timings_records_steps() {
    let dir = tempfile::tempdir().unwrap();
    let config = RotationConfig::builder().iterations(2).build();
    let (pipeline, _written) = mock_pipeline(None, config);

    let (_summary, timings) = pipeline.run_with_timings(dir.path()).unwrap();

    let names: Vec<&str> = timings.steps().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["create_raster", "write_frame", "rotate", "write_frame", "rotate", "write_frame"]
    );
    assert!(timings.get_step("write_frame").is_some());
}

#[test]
fn test_set_config_replaces_config() {
    let (mut pipeline, _written) = mock_pipeline(None, RotationConfig::default());
    pipeline.set_config(RotationConfig::builder().rotation_angle(90.0).build());

    assert_eq!(pipeline.config().rotation_angle, 90.0);
    assert_eq!(pipeline.pixel_shift(), 3);
}
