//! The owned RGBA raster and its color conversions.
//!
//! - [`PixelBuffer`]: row-major, top-to-bottom RGBA8 storage
//! - [`composite_over_black`]: premultiplied texel to plain RGB
//! - Two-buffer operations: [`PixelBuffer::difference`] and the reserved
//!   Porter-Duff operators

mod color;
mod composite;
mod pixel_buffer;

pub use color::{composite_over_black, Rgb8, Rgba8, ALPHA, BACKGROUND, BLUE, GREEN, RED};
pub use pixel_buffer::PixelBuffer;
