//! PNG writing module
//!
//! This module persists rasters as lossless single-channel PNG files.

mod writer;
mod standard_png_writer;
pub mod types;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
pub use types::{PngCompression, PngFilter, PngOptions};
