//! PNG encoding options
//!
//! Both settings only trade encoding speed against file size; the decoded pixels
//! are identical for every combination.

/// Deflate effort used by the PNG encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    /// Fastest encoding, largest file
    Fast,
    /// Codec default balance
    #[default]
    Default,
    /// Smallest file, slowest encoding
    Best,
}

/// Per-row prediction filter applied before compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngFilter {
    None,
    /// Horizontal differencing
    Sub,
    Up,
    Average,
    Paeth,
    /// Let the encoder pick a filter per row
    #[default]
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngOptions {
    pub compression: PngCompression,
    pub filter: PngFilter,
}
