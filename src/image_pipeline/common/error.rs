use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Point ({x}, {y}) is outside the image bounds {width}x{height}")]
    PointOutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RasterError>;
