//! Halftoning strategies.
//!
//! Six strategies are available, selected with [`DitherMethod`]:
//!
//! - **Threshold**: fixed midpoint split
//! - **Random**: midpoint split after a uniform ±51 perturbation
//! - **Ordered**: tiled 4x4 clustered-dot threshold matrix
//! - **Brightness-preserving**: threshold chosen so the share of white
//!   pixels matches the mean luma
//! - **Floyd-Steinberg**: serpentine error diffusion to black and white
//! - **Color Floyd-Steinberg**: serpentine error diffusion per channel to an
//!   8-8-4 level color cube
//!
//! The five monochrome strategies convert the buffer to grayscale first and
//! write R = G = B. Color Floyd-Steinberg works on the original RGB. No
//! strategy touches alpha.
//!
//! # Architecture
//!
//! Every strategy implements [`Halftone`]. The two error-diffusion
//! strategies share [`ErrorBuffer`] and the [`Kernel`] description of the
//! diffusion weights.
//!
//! # Example
//!
//! ```
//! use raster_ops::{DitherMethod, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(8, 8);
//! image.fill([128, 128, 128, 255]);
//! image.dither(DitherMethod::Ordered);
//!
//! assert!(image.texels().all(|t| t[0] == 0 || t[0] == 255));
//! ```

mod error_buffer;
mod floyd_steinberg;
mod kernel;
mod ordered;
mod threshold;

pub use error_buffer::ErrorBuffer;
pub use floyd_steinberg::{ColorFloydSteinberg, FloydSteinberg};
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use ordered::{Ordered, CLUSTER_MATRIX};
pub use threshold::{BrightnessPreserving, RandomDither, Threshold};

use crate::buffer::PixelBuffer;

/// Dithering strategy selection for [`PixelBuffer::dither`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMethod {
    /// Luma above 127 becomes white.
    Threshold,

    /// Luma plus a uniform integer in `-51..=51`, then the 127 split.
    ///
    /// With a seed the output is reproducible; without one the generator is
    /// seeded from the operating system.
    Random { seed: Option<u64> },

    /// 4x4 clustered-dot ordered dither.
    Ordered,

    /// Global threshold chosen to preserve average brightness.
    BrightnessPreserving,

    /// Serpentine Floyd-Steinberg to black and white.
    #[default]
    FloydSteinberg,

    /// Serpentine Floyd-Steinberg per channel to an 8-8-4 level cube.
    ColorFloydSteinberg,
}

/// A halftoning strategy that rewrites a buffer in place.
pub trait Halftone {
    /// Dither `image` in place. Alpha is left unchanged.
    fn apply(&self, image: &mut PixelBuffer);
}

impl PixelBuffer {
    /// Dither the buffer with the chosen strategy.
    pub fn dither(&mut self, method: DitherMethod) {
        tracing::debug!(?method, width = self.width(), height = self.height(), "dithering");
        match method {
            DitherMethod::Threshold => Threshold.apply(self),
            DitherMethod::Random { seed } => RandomDither { seed }.apply(self),
            DitherMethod::Ordered => Ordered.apply(self),
            DitherMethod::BrightnessPreserving => BrightnessPreserving.apply(self),
            DitherMethod::FloydSteinberg => FloydSteinberg.apply(self),
            DitherMethod::ColorFloydSteinberg => ColorFloydSteinberg.apply(self),
        }
    }

    /// Write `value` into R, G and B of every texel whose luma passes `white`.
    ///
    /// Shared by the monochrome threshold strategies; expects a grayscale
    /// buffer, so the luma is read from the red channel.
    pub(crate) fn binarize(&mut self, mut white: impl FnMut(usize, usize, u8) -> bool) {
        let width = self.width() as usize;
        for (i, p) in self.bytes_mut().chunks_exact_mut(4).enumerate() {
            let (x, y) = (i % width, i / width);
            let v = if white(x, y, p[0]) { 255 } else { 0 };
            p[0] = v;
            p[1] = v;
            p[2] = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut image = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y * width) * 255 / (width * height - 1)) as u8;
                image.set_pixel(x, y, [v, v / 2, 255 - v, (x * 7 % 256) as u8]);
            }
        }
        image
    }

    #[test]
    fn test_every_method_preserves_alpha() {
        let methods = [
            DitherMethod::Threshold,
            DitherMethod::Random { seed: Some(7) },
            DitherMethod::Ordered,
            DitherMethod::BrightnessPreserving,
            DitherMethod::FloydSteinberg,
            DitherMethod::ColorFloydSteinberg,
        ];
        for method in methods {
            let mut image = gradient(9, 7);
            let alphas: Vec<u8> = image.texels().map(|t| t[3]).collect();
            image.dither(method);
            let after: Vec<u8> = image.texels().map(|t| t[3]).collect();
            assert_eq!(alphas, after, "{:?} changed alpha", method);
        }
    }

    #[test]
    fn test_monochrome_methods_are_binary_gray() {
        let methods = [
            DitherMethod::Threshold,
            DitherMethod::Random { seed: Some(1) },
            DitherMethod::Ordered,
            DitherMethod::BrightnessPreserving,
            DitherMethod::FloydSteinberg,
        ];
        for method in methods {
            let mut image = gradient(16, 16);
            image.dither(method);
            for t in image.texels() {
                assert!(t[0] == 0 || t[0] == 255, "{:?} produced {}", method, t[0]);
                assert_eq!(t[0], t[1]);
                assert_eq!(t[1], t[2]);
            }
        }
    }

    #[test]
    fn test_default_method_is_floyd_steinberg() {
        assert_eq!(DitherMethod::default(), DitherMethod::FloydSteinberg);
    }

    #[test]
    fn test_empty_buffer_is_fine() {
        let mut image = PixelBuffer::new(0, 0);
        image.dither(DitherMethod::ColorFloydSteinberg);
        image.dither(DitherMethod::BrightnessPreserving);
        assert!(image.is_empty());
    }
}
