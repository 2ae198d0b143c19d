//! Factor-of-two resampling.
//!
//! Both directions use binomial weights. Halving blurs with the 3-tap
//! `[1, 2, 1] / 4` filter at every second source pixel. Doubling picks taps
//! per axis by the parity of the output coordinate: an even coordinate sits
//! on a source sample and uses the 3-tap filter; an odd one sits between two
//! samples and uses the 4-tap `[1, 3, 3, 1] / 8` filter. The 2-D weight is
//! the product of the two axes, giving 3x3, 4x4, 4x3 and 3x4 kernels.

use super::reflect;
use crate::buffer::PixelBuffer;
use crate::error::Result;

/// One axis worth of resampling taps, starting at offset `first`.
struct Taps {
    first: isize,
    weights: &'static [f32],
}

const ON_SAMPLE: Taps = Taps {
    first: -1,
    weights: &[0.25, 0.5, 0.25],
};

const BETWEEN_SAMPLES: Taps = Taps {
    first: -1,
    weights: &[0.125, 0.375, 0.375, 0.125],
};

impl Taps {
    #[inline]
    fn for_parity(coordinate: usize) -> &'static Taps {
        if coordinate % 2 == 0 {
            &ON_SAMPLE
        } else {
            &BETWEEN_SAMPLES
        }
    }
}

/// Weighted RGB sum around `(cx, cy)` in `src`, truncated to bytes.
#[inline]
fn sample(
    src: &[u8],
    width: usize,
    height: usize,
    cx: usize,
    cy: usize,
    tx: &Taps,
    ty: &Taps,
) -> [u8; 3] {
    let mut sum = [0.0f32; 3];
    for (j, wy) in ty.weights.iter().enumerate() {
        let sy = reflect(cy, ty.first + j as isize, height);
        for (i, wx) in tx.weights.iter().enumerate() {
            let sx = reflect(cx, tx.first + i as isize, width);
            let weight = wx * wy;
            let s = (sy * width + sx) * 4;
            for c in 0..3 {
                sum[c] += src[s + c] as f32 * weight;
            }
        }
    }
    // `as` truncates and saturates
    [sum[0] as u8, sum[1] as u8, sum[2] as u8]
}

impl PixelBuffer {
    /// Halve both dimensions (integer division). Output alpha is 255.
    pub fn half_size(&mut self) {
        let (width, height) = (self.width() as usize, self.height() as usize);
        let (out_w, out_h) = (width / 2, height / 2);
        let src = self.as_bytes();

        let mut out = vec![0u8; out_w * out_h * 4];
        for y in 0..out_h {
            for x in 0..out_w {
                let rgb = sample(src, width, height, 2 * x, 2 * y, &ON_SAMPLE, &ON_SAMPLE);
                let o = (y * out_w + x) * 4;
                out[o..o + 3].copy_from_slice(&rgb);
                out[o + 3] = 255;
            }
        }

        tracing::debug!(from = ?(width, height), to = ?(out_w, out_h), "half size");
        self.replace(out_w as u32, out_h as u32, out);
    }

    /// Double both dimensions. Output alpha is 255.
    pub fn double_size(&mut self) {
        let (width, height) = (self.width() as usize, self.height() as usize);
        let (out_w, out_h) = (width * 2, height * 2);
        let src = self.as_bytes();

        let mut out = vec![0u8; out_w * out_h * 4];
        for y in 0..out_h {
            let ty = Taps::for_parity(y);
            for x in 0..out_w {
                let tx = Taps::for_parity(x);
                let rgb = sample(src, width, height, x / 2, y / 2, tx, ty);
                let o = (y * out_w + x) * 4;
                out[o..o + 3].copy_from_slice(&rgb);
                out[o + 3] = 255;
            }
        }

        tracing::debug!(from = ?(width, height), to = ?(out_w, out_h), "double size");
        self.replace(out_w as u32, out_h as u32, out);
    }

    /// Scale by an arbitrary factor. Reserved.
    pub fn resize(&mut self, _scale: f32) -> Result<()> {
        self.clear_unimplemented("resize")
    }

    /// Rotate clockwise by `degrees` without resizing. Reserved.
    pub fn rotate(&mut self, _degrees: f32) -> Result<()> {
        self.clear_unimplemented("rotate")
    }
}
