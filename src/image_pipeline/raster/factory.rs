use tracing::debug;

use crate::image_pipeline::common::error::{RasterError, Result};
use crate::image_pipeline::raster::types::GrayRaster;

/// Background level of a freshly synthesized raster.
pub const BACKGROUND_INTENSITY: u8 = 230;

/// Level of the single marked pixel.
pub const MARK_INTENSITY: u8 = 0;

/// Builds a `width` x `height` raster filled with [`BACKGROUND_INTENSITY`] and
/// a single [`MARK_INTENSITY`] pixel at (`point_x`, `point_y`).
///
/// The point is checked before anything is allocated. Coordinates are signed so
/// that a negative point is reported rather than silently wrapped.
///
/// # Errors
///
/// * `InvalidDimensions` - width or height is zero
/// * `PointOutOfBounds` - the point does not satisfy `0 <= x < width`, `0 <= y < height`
pub fn create_marked_raster(
    width: usize,
    height: usize,
    point_x: i64,
    point_y: i64,
) -> Result<GrayRaster> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions(width, height));
    }

    let (x, y) = match (checked_coord(point_x, width), checked_coord(point_y, height)) {
        (Some(x), Some(y)) => (x, y),
        _ => {
            return Err(RasterError::PointOutOfBounds {
                x: point_x,
                y: point_y,
                width,
                height,
            });
        }
    };

    debug!("Creating {}x{} raster marked at ({}, {})", width, height, x, y);

    let mut raster = GrayRaster::new(width, height, BACKGROUND_INTENSITY);
    raster.set(x, y, MARK_INTENSITY);
    Ok(raster)
}

fn checked_coord(value: i64, limit: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < limit)
}
