use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::GrayRaster;
use crate::image_pipeline::png::types::PngOptions;

pub trait PngWriter {
    fn write_png(&self, raster: &GrayRaster, output: &mut dyn Write, options: &PngOptions) -> Result<()>;
}
