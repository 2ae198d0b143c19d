//! 5x5 fixed-kernel convolution.
//!
//! Each kernel is the outer product of a 5-tap vector with itself, so the
//! filter runs as a horizontal then a vertical pass. Both passes keep
//! unnormalized integer sums and divide once at the end, which gives exactly
//! the 2-D integer convolution result.

use super::{reflect, FilterKind};
use crate::buffer::PixelBuffer;
use crate::error::Result;

const RADIUS: isize = 2;

/// A 5x5 kernel given by its 1-D taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparableKernel {
    pub taps: [u32; 5],
    /// Sum of all 25 weights: `(sum of taps)^2`.
    pub divisor: u32,
}

pub const BOX: SeparableKernel = SeparableKernel {
    taps: [1, 1, 1, 1, 1],
    divisor: 25,
};

pub const BARTLETT: SeparableKernel = SeparableKernel {
    taps: [1, 2, 3, 2, 1],
    divisor: 81,
};

pub const GAUSSIAN: SeparableKernel = SeparableKernel {
    taps: [1, 4, 6, 4, 1],
    divisor: 256,
};

impl SeparableKernel {
    /// Convolve the RGB channels of `image`, returning new RGBA bytes.
    fn convolve(&self, image: &PixelBuffer) -> Vec<u8> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let src = image.as_bytes();

        let mut horizontal = vec![[0u32; 3]; width * height];
        for y in 0..height {
            for x in 0..width {
                let mut sum = [0u32; 3];
                for (k, &tap) in self.taps.iter().enumerate() {
                    let sx = reflect(x, k as isize - RADIUS, width);
                    let i = (y * width + sx) * 4;
                    for c in 0..3 {
                        sum[c] += tap * src[i + c] as u32;
                    }
                }
                horizontal[y * width + x] = sum;
            }
        }

        let mut out = vec![0u8; width * height * 4];
        for y in 0..height {
            for x in 0..width {
                let mut sum = [0u32; 3];
                for (k, &tap) in self.taps.iter().enumerate() {
                    let sy = reflect(y, k as isize - RADIUS, height);
                    let h = horizontal[sy * width + x];
                    for c in 0..3 {
                        sum[c] += tap * h[c];
                    }
                }
                let o = (y * width + x) * 4;
                for c in 0..3 {
                    out[o + c] = (sum[c] / self.divisor) as u8;
                }
                out[o + 3] = 255;
            }
        }
        out
    }
}

impl PixelBuffer {
    /// Apply a 5x5 low-pass filter. Output alpha is 255.
    pub fn filter(&mut self, kind: FilterKind) {
        let pixels = kind.kernel().convolve(self);
        let (width, height) = self.dimensions();
        self.replace(width, height, pixels);
    }

    /// N x N Gaussian filter. Reserved.
    pub fn filter_gaussian_n(&mut self, _size: u32) -> Result<()> {
        self.clear_unimplemented("gaussian N x N filter")
    }

    /// 5x5 edge-detect (high-pass) filter. Reserved.
    pub fn filter_edge(&mut self) -> Result<()> {
        self.clear_unimplemented("edge filter")
    }

    /// 5x5 edge-enhance filter. Reserved.
    pub fn filter_enhance(&mut self) -> Result<()> {
        self.clear_unimplemented("enhance filter")
    }
}
