//! Neighborhood filters and 2x resampling.
//!
//! All filters read R, G and B independently, write opaque output (alpha
//! 255) and compute the full result before replacing the buffer.
//!
//! # Boundary Handling
//!
//! A sample at `p + i` that falls outside the image is taken from `p - i`
//! instead (mirror at the edge). When the image is smaller than the kernel
//! radius the mirrored coordinate can still be outside; it is then clamped
//! to the nearest edge.

mod convolve;
mod resample;

pub use convolve::{SeparableKernel, BARTLETT, BOX, GAUSSIAN};

/// Fixed 5x5 low-pass filters for [`PixelBuffer::filter`](crate::PixelBuffer::filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Uniform weights, normalized by 25.
    Box,
    /// Triangle weights `[1, 2, 3, 2, 1]` squared, normalized by 81.
    Bartlett,
    /// Binomial weights `[1, 4, 6, 4, 1]` squared, normalized by 256.
    Gaussian,
}

impl FilterKind {
    /// The separable kernel this filter applies.
    pub fn kernel(self) -> &'static SeparableKernel {
        match self {
            FilterKind::Box => &BOX,
            FilterKind::Bartlett => &BARTLETT,
            FilterKind::Gaussian => &GAUSSIAN,
        }
    }
}

/// Mirror `center + offset` back into `0..len`.
#[inline]
pub(crate) fn reflect(center: usize, offset: isize, len: usize) -> usize {
    let c = center as isize;
    let n = len as isize;
    let mut p = c + offset;
    if p < 0 || p >= n {
        p = c - offset;
    }
    p.clamp(0, n - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_inside_is_identity() {
        assert_eq!(reflect(5, 2, 10), 7);
        assert_eq!(reflect(5, -2, 10), 3);
    }

    #[test]
    fn test_reflect_negates_offset_at_edges() {
        assert_eq!(reflect(0, -2, 10), 2);
        assert_eq!(reflect(1, -2, 10), 3);
        assert_eq!(reflect(9, 1, 10), 8);
        assert_eq!(reflect(8, 2, 10), 6);
    }

    #[test]
    fn test_reflect_clamps_tiny_images() {
        assert_eq!(reflect(0, 2, 1), 0);
        assert_eq!(reflect(0, -2, 1), 0);
        assert_eq!(reflect(1, 2, 2), 0);
    }

    #[test]
    fn test_kind_kernels() {
        assert_eq!(FilterKind::Box.kernel().divisor, 25);
        assert_eq!(FilterKind::Bartlett.kernel().divisor, 81);
        assert_eq!(FilterKind::Gaussian.kernel().divisor, 256);
    }
}
