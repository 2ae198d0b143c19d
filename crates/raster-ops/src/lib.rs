#![allow(clippy::needless_range_loop, clippy::manual_range_contains)]

//! raster-ops: transforms over an in-memory RGBA raster
//!
//! This library owns a single raster type, [`PixelBuffer`], and a set of
//! per-pixel and per-neighborhood transforms that mutate it in place (or
//! replace its storage, for resampling).
//!
//! # Quick Start
//!
//! ```
//! use raster_ops::{DitherMethod, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(4, 4);
//! image.fill([200, 100, 50, 255]);
//!
//! image.quantize_uniform();
//! assert_eq!(image.pixel(0, 0), [192, 96, 0, 255]);
//!
//! image.dither(DitherMethod::FloydSteinberg);
//! assert!(image.as_bytes().chunks(4).all(|p| p[0] == 0 || p[0] == 255));
//! ```
//!
//! # Transforms
//!
//! | Area | Operations |
//! |------|------------|
//! | Color conversion | [`PixelBuffer::to_rgb`], [`PixelBuffer::to_grayscale`], [`PixelBuffer::difference`] |
//! | Quantization | [`PixelBuffer::quantize_uniform`], [`PixelBuffer::quantize_populosity`] |
//! | Dithering | [`PixelBuffer::dither`] with any [`DitherMethod`] |
//! | Filtering | [`PixelBuffer::filter`] with any [`FilterKind`] |
//! | Resampling | [`PixelBuffer::half_size`], [`PixelBuffer::double_size`] |
//! | Painting | [`PixelBuffer::paint_stroke`] |
//!
//! # Alpha Handling
//!
//! Stored color channels are treated as premultiplied by alpha. Converting a
//! texel to plain RGB composites it over black by dividing the alpha back
//! out (see [`composite_over_black`]). Dithering and quantization never touch
//! alpha; the neighborhood filters and resamplers write fully opaque output.
//!
//! # Failure Model
//!
//! Transforms that cannot fail return `()`. Two-buffer transforms return
//! [`RasterError::DimensionMismatch`] without touching either buffer when the
//! sizes differ. Operations that are reserved but have no algorithm yet
//! (Porter-Duff compositing, rotation, arbitrary resize, edge and enhance
//! filters, painterly rendering) clear the buffer to transparent black and
//! return [`RasterError::NotImplemented`].

pub mod buffer;
pub mod dither;
pub mod error;
pub mod filter;
pub mod grayscale;
pub mod paint;
pub mod quantize;


pub use buffer::{composite_over_black, PixelBuffer, Rgb8, Rgba8};
pub use dither::{DitherMethod, Halftone};
pub use error::{RasterError, Result};
pub use filter::FilterKind;
pub use paint::Stroke;
pub use quantize::PaletteEntry;
