use tracing::debug;

use crate::image_pipeline::cylinder::types::CylinderGeometry;
use crate::image_pipeline::raster::GrayRaster;

/// Whole-pixel horizontal displacement for a rotation of `angle_degrees`.
///
/// The fractional part is truncated toward zero, so -1.57 px becomes -1 and
/// 1.57 px becomes 1. Repeated calls therefore drift for non-integral arcs.
pub fn pixel_shift(geometry: &CylinderGeometry, angle_degrees: f64) -> i64 {
    exact_pixel_shift(geometry, angle_degrees) as i64
}

fn exact_pixel_shift(geometry: &CylinderGeometry, angle_degrees: f64) -> f64 {
    geometry.arc_length_mm(angle_degrees) * geometry.mm_to_pixel_ratio
}

/// Returns a new raster whose columns are cyclically displaced by `shift`.
///
/// The sample at `(x, y)` lands at `((x + shift) mod width, y)`. Rows move
/// independently and nothing is interpolated.
pub fn shift_columns(raster: &GrayRaster, shift: i64) -> GrayRaster {
    let width = raster.width();
    let height = raster.height();
    let mut shifted = GrayRaster::new(width, height, 0);
    if width == 0 {
        return shifted;
    }

    let offset = shift.rem_euclid(width as i64) as usize;
    for y in 0..height {
        for x in 0..width {
            let new_x = (x + offset) % width;
            shifted.set(new_x, y, raster.get(x, y));
        }
    }

    shifted
}

/// Simulates turning the print cylinder by `angle_degrees`.
pub fn rotate_cylinder(
    raster: &GrayRaster,
    geometry: &CylinderGeometry,
    angle_degrees: f64,
) -> GrayRaster {
    let exact = exact_pixel_shift(geometry, angle_degrees);
    let shift = exact as i64;
    debug!(shift, exact, angle_degrees, "Rotating cylinder");

    shift_columns(raster, shift)
}
