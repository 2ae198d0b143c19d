//! Global threshold strategies: fixed, randomized and brightness-preserving.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Halftone;
use crate::buffer::PixelBuffer;

/// Luma strictly above this becomes white.
const MIDPOINT: i32 = 127;

/// Largest perturbation added by [`RandomDither`], in either direction.
pub const RANDOM_AMPLITUDE: i32 = 51;

/// Fixed midpoint threshold.
pub struct Threshold;

impl Halftone for Threshold {
    fn apply(&self, image: &mut PixelBuffer) {
        image.to_grayscale();
        image.binarize(|_, _, luma| luma as i32 > MIDPOINT);
    }
}

/// Midpoint threshold after adding uniform noise in `-51..=51`.
pub struct RandomDither {
    /// Seed for a reproducible result; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RandomDither {
    /// Dither with a caller-supplied random source.
    pub fn apply_with_rng<R: Rng>(image: &mut PixelBuffer, rng: &mut R) {
        image.to_grayscale();
        image.binarize(|_, _, luma| {
            luma as i32 + rng.gen_range(-RANDOM_AMPLITUDE..=RANDOM_AMPLITUDE) > MIDPOINT
        });
    }
}

impl Halftone for RandomDither {
    fn apply(&self, image: &mut PixelBuffer) {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::apply_with_rng(image, &mut rng);
    }
}

/// Threshold chosen so the number of white pixels matches mean brightness.
///
/// With `S` the sum of all luma values, the target white count is `S / 255`.
/// Thresholds are scanned from 255 down, accumulating the luma histogram,
/// until the count of pixels at or above the threshold reaches the target.
pub struct BrightnessPreserving;

impl BrightnessPreserving {
    /// Threshold for a grayscale buffer; pixels with luma `>=` it become white.
    pub fn threshold(image: &PixelBuffer) -> u8 {
        let mut histogram = [0u64; 256];
        let mut sum: u64 = 0;
        for t in image.texels() {
            histogram[t[0] as usize] += 1;
            sum += t[0] as u64;
        }
        let target = sum / 255;

        let mut accumulated: u64 = 0;
        for threshold in (0..=255u8).rev() {
            accumulated += histogram[threshold as usize];
            if accumulated >= target {
                return threshold;
            }
        }
        // not reached: target never exceeds the count of non-black pixels
        0
    }
}

impl Halftone for BrightnessPreserving {
    fn apply(&self, image: &mut PixelBuffer) {
        image.to_grayscale();
        let threshold = Self::threshold(image);
        tracing::debug!(threshold, "brightness-preserving threshold");
        image.binarize(|_, _, luma| luma >= threshold);
    }
}
