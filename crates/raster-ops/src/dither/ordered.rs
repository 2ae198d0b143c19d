//! Clustered-dot ordered dithering.

use super::Halftone;
use crate::buffer::PixelBuffer;

/// 4x4 dot-growth threshold cell, indexed `[x % 4][y % 4]`.
pub const CLUSTER_MATRIX: [[f64; 4]; 4] = [
    [0.7059, 0.0588, 0.4706, 0.1765],
    [0.3529, 0.9412, 0.7647, 0.5294],
    [0.5882, 0.8235, 0.8824, 0.2941],
    [0.2353, 0.4118, 0.1176, 0.6471],
];

/// Ordered dither with [`CLUSTER_MATRIX`] tiled over the image.
///
/// A pixel is white when `luma >= CLUSTER_MATRIX[x % 4][y % 4] * 255`.
pub struct Ordered;

impl Halftone for Ordered {
    fn apply(&self, image: &mut PixelBuffer) {
        image.to_grayscale();
        image.binarize(|x, y, luma| luma as f64 >= CLUSTER_MATRIX[x % 4][y % 4] * 255.0);
    }
}
