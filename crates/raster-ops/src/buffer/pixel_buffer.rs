//! [`PixelBuffer`]: the owned RGBA8 raster every transform operates on.

use super::color::{composite_over_black, Rgba8};
use crate::error::{RasterError, Result};

/// An owned, row-major RGBA8 raster.
///
/// Texels are stored top-to-bottom, left-to-right, four bytes each in
/// R, G, B, A order. The backing array always holds exactly
/// `width * height * 4` bytes. Cloning makes a deep copy; no two buffers
/// ever share storage.
///
/// # Example
///
/// ```
/// use raster_ops::PixelBuffer;
///
/// let texels = vec![255, 0, 0, 255, 0, 255, 0, 255];
/// let image = PixelBuffer::from_rgba(2, 1, &texels).unwrap();
///
/// assert_eq!(image.pixel(1, 0), [0, 255, 0, 255]);
/// assert_eq!(image.to_rgb(), vec![255, 0, 0, 0, 255, 0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer of the given size with every byte zeroed.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; texel_bytes(width, height)],
        }
    }

    /// Create a buffer holding a copy of `texels`.
    ///
    /// Fails with [`RasterError::InvalidLength`] unless `texels` holds
    /// exactly `width * height` RGBA texels.
    pub fn from_rgba(width: u32, height: u32, texels: &[u8]) -> Result<Self> {
        Self::from_vec(width, height, texels.to_vec())
    }

    /// Create a buffer taking ownership of `pixels`.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != texel_bytes(width, height) {
            return Err(RasterError::InvalidLength {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` when the buffer holds no texels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and return its RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Read the texel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Overwrite the texel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, texel: Rgba8) {
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&texel);
    }

    /// Set every texel to `texel`.
    pub fn fill(&mut self, texel: Rgba8) {
        for p in self.pixels.chunks_exact_mut(4) {
            p.copy_from_slice(&texel);
        }
    }

    /// Zero every byte, leaving fully transparent black.
    pub fn clear_to_black(&mut self) {
        self.pixels.fill(0);
    }

    /// Convert to a new RGB8 array by compositing each texel over black.
    ///
    /// The returned array holds `width * height * 3` bytes. The buffer is
    /// left untouched.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() / 4 * 3);
        for p in self.pixels.chunks_exact(4) {
            rgb.extend_from_slice(&composite_over_black([p[0], p[1], p[2], p[3]]));
        }
        rgb
    }

    /// Iterate over texels in storage order.
    pub fn texels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.pixels
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Swap in a fully computed raster of a (possibly) different size.
    pub(crate) fn replace(&mut self, width: u32, height: u32, pixels: Vec<u8>) {
        debug_assert_eq!(pixels.len(), texel_bytes(width, height));
        self.pixels = pixels;
        self.width = width;
        self.height = height;
    }

    pub(crate) fn ensure_same_size(&self, other: &PixelBuffer) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(RasterError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Shared body of every reserved operation: clear and report.
    pub(crate) fn clear_unimplemented(&mut self, operation: &'static str) -> Result<()> {
        tracing::warn!(operation, "operation not implemented, buffer cleared");
        self.clear_to_black();
        Err(RasterError::NotImplemented(operation))
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }
}

#[inline]
fn texel_bytes(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
