//! Raster module
//!
//! Single-channel raster storage and the factory that synthesizes the marked test image.

mod factory;
pub mod types;

pub use factory::{create_marked_raster, BACKGROUND_INTENSITY, MARK_INTENSITY};
pub use types::GrayRaster;
