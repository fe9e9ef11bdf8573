use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{RasterError, Result};
use crate::image_pipeline::png::types::{PngCompression, PngFilter, PngOptions};
use crate::image_pipeline::png::writer::PngWriter;
use crate::image_pipeline::raster::GrayRaster;

/// Encodes rasters as 8-bit grayscale PNG through the `image` crate.
pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, raster: &GrayRaster, output: &mut dyn Write, options: &PngOptions) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", raster.width(), raster.height());

        let width = u32::try_from(raster.width())
            .map_err(|_| RasterError::InvalidDimensions(raster.width(), raster.height()))?;
        let height = u32::try_from(raster.height())
            .map_err(|_| RasterError::InvalidDimensions(raster.width(), raster.height()))?;

        let compression = match options.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        let filter = match options.filter {
            PngFilter::None => FilterType::NoFilter,
            PngFilter::Sub => FilterType::Sub,
            PngFilter::Up => FilterType::Up,
            PngFilter::Average => FilterType::Avg,
            PngFilter::Paeth => FilterType::Paeth,
            PngFilter::Adaptive => FilterType::Adaptive,
        };

        let mut buffer = Vec::new();

        PngEncoder::new_with_quality(&mut buffer, compression, filter)
            .write_image(raster.samples(), width, height, ExtendedColorType::L8)
            .map_err(|e| RasterError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
