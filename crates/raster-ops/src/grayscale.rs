//! Luminance conversion.
//!
//! Uses the ITU-R BT.601 luma weights `0.299 R + 0.587 G + 0.114 B`. The
//! weighted sum is computed in thousandths so truncation applies to the
//! exact value: a neutral gray `(v, v, v)` always maps to `v`.

use crate::buffer::PixelBuffer;

const WEIGHT_R: u32 = 299;
const WEIGHT_G: u32 = 587;
const WEIGHT_B: u32 = 114;
const WEIGHT_SUM: u32 = WEIGHT_R + WEIGHT_G + WEIGHT_B;

/// BT.601 luma of one RGB triple, truncated.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32) / WEIGHT_SUM) as u8
}

impl PixelBuffer {
    /// Replace R, G and B of every texel with its luma. Alpha is unchanged.
    pub fn to_grayscale(&mut self) {
        for p in self.bytes_mut().chunks_exact_mut(4) {
            let i = luma(p[0], p[1], p[2]);
            p[0] = i;
            p[1] = i;
            p[2] = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_gray_is_fixed_point() {
        for v in 0..=255u8 {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn test_primaries() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 149);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_grayscale_equal_channels_alpha_kept() {
        let mut image = PixelBuffer::new(3, 1);
        image.set_pixel(0, 0, [255, 0, 0, 10]);
        image.set_pixel(1, 0, [12, 200, 77, 128]);
        image.set_pixel(2, 0, [1, 2, 3, 255]);
        let alphas: Vec<u8> = image.texels().map(|t| t[3]).collect();

        image.to_grayscale();

        for (t, a) in image.texels().zip(alphas) {
            assert_eq!(t[0], t[1]);
            assert_eq!(t[1], t[2]);
            assert_eq!(t[3], a);
        }
        assert_eq!(image.pixel(0, 0), [76, 76, 76, 10]);
    }
}
