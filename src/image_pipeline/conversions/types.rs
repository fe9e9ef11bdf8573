//! Rotation run configuration types

use crate::image_pipeline::cylinder::CylinderGeometry;
use crate::image_pipeline::png::{PngCompression, PngFilter, PngOptions};

/// Configuration for a cylinder rotation run
#[derive(Debug, Clone, PartialEq)]
pub struct RotationConfig {
    /// Raster width in pixels
    pub width: usize,
    /// Raster height in pixels
    pub height: usize,
    /// Column of the marked pixel
    pub point_x: i64,
    /// Row of the marked pixel
    pub point_y: i64,
    /// Multiplier from millimeters of surface travel to pixels
    pub mm_to_pixel_ratio: f64,
    /// Cylinder diameter in millimeters
    pub diameter_mm: f64,
    /// Rotation applied per iteration, in degrees
    pub rotation_angle: f64,
    /// Number of rotated frames to produce
    pub iterations: usize,
    /// Encoder settings for every written frame
    pub png: PngOptions,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            point_x: 9,
            point_y: 0,
            mm_to_pixel_ratio: 0.5,
            diameter_mm: 8.0,
            rotation_angle: 45.0,
            iterations: 10,
            png: PngOptions::default(),
        }
    }
}

impl RotationConfig {
    pub fn builder() -> RotationConfigBuilder {
        RotationConfigBuilder::default()
    }

    pub fn geometry(&self) -> CylinderGeometry {
        CylinderGeometry::new(self.mm_to_pixel_ratio, self.diameter_mm)
    }
}

/// Builder for RotationConfig
#[derive(Default)]
pub struct RotationConfigBuilder {
    dimensions: Option<(usize, usize)>,
    point: Option<(i64, i64)>,
    mm_to_pixel_ratio: Option<f64>,
    diameter_mm: Option<f64>,
    rotation_angle: Option<f64>,
    iterations: Option<usize>,
    compression: Option<PngCompression>,
    filter: Option<PngFilter>,
}

impl RotationConfigBuilder {
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    pub fn point(mut self, x: i64, y: i64) -> Self {
        self.point = Some((x, y));
        self
    }

    pub fn mm_to_pixel_ratio(mut self, ratio: f64) -> Self {
        self.mm_to_pixel_ratio = Some(ratio);
        self
    }

    pub fn diameter_mm(mut self, diameter: f64) -> Self {
        self.diameter_mm = Some(diameter);
        self
    }

    pub fn rotation_angle(mut self, degrees: f64) -> Self {
        self.rotation_angle = Some(degrees);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn filter(mut self, filter: PngFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn build(self) -> RotationConfig {
        let default = RotationConfig::default();
        let (width, height) = self.dimensions.unwrap_or((default.width, default.height));
        let (point_x, point_y) = self.point.unwrap_or((default.point_x, default.point_y));
        RotationConfig {
            width,
            height,
            point_x,
            point_y,
            mm_to_pixel_ratio: self.mm_to_pixel_ratio.unwrap_or(default.mm_to_pixel_ratio),
            diameter_mm: self.diameter_mm.unwrap_or(default.diameter_mm),
            rotation_angle: self.rotation_angle.unwrap_or(default.rotation_angle),
            iterations: self.iterations.unwrap_or(default.iterations),
            png: PngOptions {
                compression: self.compression.unwrap_or(default.png.compression),
                filter: self.filter.unwrap_or(default.png.filter),
            },
        }
    }
}
