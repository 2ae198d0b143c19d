//! Stroke painting.
//!
//! A [`Stroke`] is one stamped disc. Higher-level painterly rendering that
//! would lay down many strokes is reserved.

mod stroke;

pub use stroke::Stroke;

use crate::buffer::PixelBuffer;
use crate::error::Result;

impl PixelBuffer {
    /// Painterly rendering built on [`PixelBuffer::paint_stroke`]. Reserved.
    pub fn paint_painterly(&mut self) -> Result<()> {
        self.clear_unimplemented("painterly rendering")
    }
}
