//! Serpentine Floyd-Steinberg error diffusion, monochrome and color.
//!
//! Both variants scan even rows left to right and odd rows right to left,
//! mirroring the kernel so error always flows to unvisited pixels:
//!
//! ```text
//! Left-to-right:      Right-to-left:
//!     X   7/16        7/16   X
//! 3/16 5/16 1/16      1/16 5/16 3/16
//! ```
//!
//! Error pushed past the image edge is dropped.

use super::error_buffer::diffuse_serpentine;
use super::kernel::FLOYD_STEINBERG;
use super::Halftone;
use crate::buffer::PixelBuffer;

/// Red and green decision boundaries (0..=255 scale).
const RG_BOUNDARIES: [f32; 7] = [18.0, 54.5, 91.0, 127.5, 164.0, 200.5, 237.0];
/// Red and green output levels.
const RG_LEVELS: [u8; 8] = [0, 36, 73, 109, 146, 182, 219, 255];
/// Blue decision boundaries (0..=255 scale).
const B_BOUNDARIES: [f32; 3] = [42.5, 127.5, 212.5];
/// Blue output levels.
const B_LEVELS: [u8; 4] = [0, 85, 170, 255];

/// Monochrome error diffusion to black and white.
///
/// Works on luma scaled to `0.0..=1.0`; a value above 0.5 becomes white.
pub struct FloydSteinberg;

impl Halftone for FloydSteinberg {
    fn apply(&self, image: &mut PixelBuffer) {
        image.to_grayscale();
        let (width, height) = (image.width() as usize, image.height() as usize);

        let mut values: Vec<[f32; 1]> = image.texels().map(|t| [t[0] as f32 / 255.0]).collect();
        diffuse_serpentine(&mut values, width, height, &FLOYD_STEINBERG, |v| {
            if v[0] > 0.5 {
                [1.0]
            } else {
                [0.0]
            }
        });

        for (p, v) in image.bytes_mut().chunks_exact_mut(4).zip(&values) {
            let out = (v[0] * 255.0) as u8;
            p[0] = out;
            p[1] = out;
            p[2] = out;
        }
    }
}

/// Per-channel error diffusion to an 8-8-4 level color cube.
///
/// Red and green snap to one of eight levels, blue to one of four. Channels
/// diffuse independently; no grayscale step.
pub struct ColorFloydSteinberg;

#[inline]
fn snap(value: f32, boundaries: &[f32], levels: &[u8]) -> f32 {
    let i = boundaries
        .iter()
        .position(|&b| value < b)
        .unwrap_or(boundaries.len());
    levels[i] as f32
}

impl Halftone for ColorFloydSteinberg {
    fn apply(&self, image: &mut PixelBuffer) {
        let (width, height) = (image.width() as usize, image.height() as usize);

        let mut values: Vec<[f32; 3]> = image
            .texels()
            .map(|t| [t[0] as f32, t[1] as f32, t[2] as f32])
            .collect();
        diffuse_serpentine(&mut values, width, height, &FLOYD_STEINBERG, |v| {
            [
                snap(v[0], &RG_BOUNDARIES, &RG_LEVELS),
                snap(v[1], &RG_BOUNDARIES, &RG_LEVELS),
                snap(v[2], &B_BOUNDARIES, &B_LEVELS),
            ]
        });

        for (p, v) in image.bytes_mut().chunks_exact_mut(4).zip(&values) {
            // snapped values are exact level bytes
            p[0] = v[0] as u8;
            p[1] = v[1] as u8;
            p[2] = v[2] as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, texel: [u8; 4]) -> PixelBuffer {
        let mut image = PixelBuffer::new(width, height);
        image.fill(texel);
        image
    }

    fn white_ratio(image: &PixelBuffer) -> f64 {
        let whites = image.texels().filter(|t| t[0] == 255).count();
        whites as f64 / image.texels().count() as f64
    }

    #[test]
    fn test_pure_black_and_white_are_fixed() {
        let mut black = solid(5, 5, [0, 0, 0, 255]);
        FloydSteinberg.apply(&mut black);
        assert!(black.texels().all(|t| t == [0, 0, 0, 255]));

        let mut white = solid(5, 5, [255, 255, 255, 255]);
        FloydSteinberg.apply(&mut white);
        assert!(white.texels().all(|t| t == [255, 255, 255, 255]));
    }

    #[test]
    fn test_error_carries_to_next_pixel() {
        // 100/255 = 0.392 -> black; next pixel 0.392 + 0.392 * 7/16 = 0.564 -> white
        let mut image = solid(2, 1, [100, 100, 100, 255]);
        FloydSteinberg.apply(&mut image);
        assert_eq!(image.pixel(0, 0)[0], 0);
        assert_eq!(image.pixel(1, 0)[0], 255);
    }

    #[test]
    fn test_mid_gray_is_about_half_white() {
        let mut image = solid(64, 64, [128, 128, 128, 255]);
        FloydSteinberg.apply(&mut image);
        let ratio = white_ratio(&image);
        assert!(
            (ratio - 128.0 / 255.0).abs() < 0.02,
            "expected ~0.502 white, got {}",
            ratio
        );
    }

    #[test]
    fn test_mid_gray_pattern_is_deterministic() {
        let mut a = solid(16, 16, [128, 128, 128, 255]);
        let mut b = a.clone();
        FloydSteinberg.apply(&mut a);
        FloydSteinberg.apply(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_quarter_gray_ratio() {
        let mut image = solid(48, 48, [64, 64, 64, 255]);
        FloydSteinberg.apply(&mut image);
        let ratio = white_ratio(&image);
        assert!((ratio - 64.0 / 255.0).abs() < 0.03, "got {}", ratio);
    }

    #[test]
    fn test_snap_levels() {
        assert_eq!(snap(17.9, &RG_BOUNDARIES, &RG_LEVELS), 0.0);
        assert_eq!(snap(18.0, &RG_BOUNDARIES, &RG_LEVELS), 36.0);
        assert_eq!(snap(127.4, &RG_BOUNDARIES, &RG_LEVELS), 109.0);
        assert_eq!(snap(237.0, &RG_BOUNDARIES, &RG_LEVELS), 255.0);
        assert_eq!(snap(300.0, &RG_BOUNDARIES, &RG_LEVELS), 255.0);
        assert_eq!(snap(-20.0, &B_BOUNDARIES, &B_LEVELS), 0.0);
        assert_eq!(snap(42.5, &B_BOUNDARIES, &B_LEVELS), 85.0);
        assert_eq!(snap(212.4, &B_BOUNDARIES, &B_LEVELS), 170.0);
    }

    #[test]
    fn test_color_cube_colors_are_fixed() {
        let mut image = solid(6, 5, [73, 182, 170, 200]);
        ColorFloydSteinberg.apply(&mut image);
        assert!(image.texels().all(|t| t == [73, 182, 170, 200]));
    }

    #[test]
    fn test_color_output_uses_cube_levels() {
        let mut image = PixelBuffer::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                image.set_pixel(x, y, [(x * 16) as u8, (y * 16) as u8, (x * y) as u8, 255]);
            }
        }
        ColorFloydSteinberg.apply(&mut image);
        for t in image.texels() {
            assert!(RG_LEVELS.contains(&t[0]), "red {}", t[0]);
            assert!(RG_LEVELS.contains(&t[1]), "green {}", t[1]);
            assert!(B_LEVELS.contains(&t[2]), "blue {}", t[2]);
        }
    }

    #[test]
    fn test_color_preserves_average() {
        let mut image = solid(32, 32, [100, 150, 60, 255]);
        ColorFloydSteinberg.apply(&mut image);
        let n = image.texels().count() as f64;
        let mean = |c: usize| image.texels().map(|t| t[c] as f64).sum::<f64>() / n;
        assert!((mean(0) - 100.0).abs() < 3.0, "red mean {}", mean(0));
        assert!((mean(1) - 150.0).abs() < 3.0, "green mean {}", mean(1));
        assert!((mean(2) - 60.0).abs() < 3.0, "blue mean {}", mean(2));
    }
}
