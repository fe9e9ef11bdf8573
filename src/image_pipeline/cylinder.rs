//! Cylindrical rotation module
//!
//! Converts a rotation of the print cylinder into a horizontal pixel displacement
//! and applies it to a raster with wraparound at the left and right edges.

mod shift;
pub mod types;

pub use shift::{pixel_shift, rotate_cylinder, shift_columns};
pub use types::CylinderGeometry;
