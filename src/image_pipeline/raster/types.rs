//! Raster data types

/// 8-bit grayscale raster, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    /// Width of the raster in pixels
    width: usize,
    /// Height of the raster in pixels
    height: usize,
    /// Intensity samples, `width * height` long
    data: Vec<u8>,
}

impl GrayRaster {
    /// Allocates a `width` x `height` raster with every sample set to `fill`.
    pub fn new(width: usize, height: usize, fill: u8) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the raster.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.index(x, y)]
    }

    /// # Panics
    ///
    /// Panics if the coordinate lies outside the raster.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let index = self.index(x, y);
        self.data[index] = value;
    }

    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    /// Count of samples per intensity level.
    pub fn histogram(&self) -> [usize; 256] {
        let mut counts = [0usize; 256];
        for &value in &self.data {
            counts[value as usize] += 1;
        }
        counts
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} raster",
            self.width,
            self.height
        );
        y * self.width + x
    }
}
