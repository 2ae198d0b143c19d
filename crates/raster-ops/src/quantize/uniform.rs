//! Uniform quantization to an 8-bit 3-3-2 color cube.

use crate::buffer::{PixelBuffer, BLUE, GREEN, RED};

/// Mask applied to red and green: keep the top 3 bits.
pub const RED_GREEN_MASK: u8 = 0xE0;

/// Mask applied to blue: keep the top 2 bits.
pub const BLUE_MASK: u8 = 0xC0;

impl PixelBuffer {
    /// Drop the low bits of every color channel.
    ///
    /// Red and green keep 3 bits each, blue keeps 2. Alpha is untouched. Applying this twice is the same
    /// as applying it once.
    pub fn quantize_uniform(&mut self) {
        for p in self.bytes_mut().chunks_exact_mut(4) {
            p[RED] &= RED_GREEN_MASK;
            p[GREEN] &= RED_GREEN_MASK;
            p[BLUE] &= BLUE_MASK;
        }
    }
}
