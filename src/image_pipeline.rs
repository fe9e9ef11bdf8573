//! Image processing pipeline module
//!
//! This module provides a structured approach to the cylinder print simulation,
//! with separate modules for raster synthesis, the cylindrical shift, PNG writing,
//! and run orchestration.

pub mod raster;
pub mod cylinder;
pub mod png;
pub mod conversions;
pub mod common;

pub use common::{
    RasterError,
    Result,
    PipelineTimings,
};

pub use raster::{
    GrayRaster,
    create_marked_raster,
};

pub use cylinder::{
    CylinderGeometry,
    pixel_shift,
    rotate_cylinder,
    shift_columns,
};

pub use png::{
    PngCompression,
    PngFilter,
    PngOptions,
    PngWriter,
    StandardPngWriter,
};

pub use conversions::{
    CylinderRotationPipeline,
    RotationConfig,
    RotationConfigBuilder,
    RunSummary,
};
