//! Error type shared by every fallible transform.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Two-buffer operation called with buffers of different sizes.
    #[error("image dimensions differ: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Texel array does not hold exactly `width * height` RGBA texels.
    #[error("texel array length {len} does not match dimensions {width}x{height}")]
    InvalidLength { len: usize, width: u32, height: u32 },

    /// Reserved operation without an algorithm; the buffer has been cleared.
    #[error("operation not implemented: {0}")]
    NotImplemented(&'static str),
}
