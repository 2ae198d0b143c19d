//! Operations that combine two buffers of equal size.
//!
//! Every operation here checks dimensions first. On a mismatch neither
//! buffer is modified. The Porter-Duff operators are reserved names only:
//! once the sizes agree they clear `self` and report
//! [`RasterError::NotImplemented`](crate::RasterError::NotImplemented).

use super::color::{composite_over_black, ALPHA};
use super::pixel_buffer::PixelBuffer;
use crate::error::Result;

impl PixelBuffer {
    /// Replace `self` with the per-channel absolute difference of both
    /// buffers composited over black. Alpha becomes 255.
    pub fn difference(&mut self, other: &PixelBuffer) -> Result<()> {
        self.ensure_same_size(other)?;

        for (dst, src) in self
            .bytes_mut()
            .chunks_exact_mut(4)
            .zip(other.as_bytes().chunks_exact(4))
        {
            let a = composite_over_black([dst[0], dst[1], dst[2], dst[3]]);
            let b = composite_over_black([src[0], src[1], src[2], src[3]]);
            for c in 0..3 {
                dst[c] = a[c].abs_diff(b[c]);
            }
            dst[ALPHA] = 255;
        }
        Ok(())
    }

    /// Porter-Duff "over". Reserved.
    pub fn composite_over(&mut self, other: &PixelBuffer) -> Result<()> {
        self.ensure_same_size(other)?;
        self.clear_unimplemented("composite over")
    }

    /// Porter-Duff "in". Reserved.
    pub fn composite_in(&mut self, other: &PixelBuffer) -> Result<()> {
        self.ensure_same_size(other)?;
        self.clear_unimplemented("composite in")
    }

    /// Porter-Duff "out". Reserved.
    pub fn composite_out(&mut self, other: &PixelBuffer) -> Result<()> {
        self.ensure_same_size(other)?;
        self.clear_unimplemented("composite out")
    }

    /// Porter-Duff "atop". Reserved.
    pub fn composite_atop(&mut self, other: &PixelBuffer) -> Result<()> {
        self.ensure_same_size(other)?;
        self.clear_unimplemented("composite atop")
    }

    /// Porter-Duff "xor". Reserved.
    pub fn composite_xor(&mut self, other: &PixelBuffer) -> Result<()> {
        self.ensure_same_size(other)?;
        self.clear_unimplemented("composite xor")
    }
}
