//! Load and save [`PixelBuffer`]s as image files.
//!
//! The format is picked from the file extension, case-insensitively:
//!
//! | Extension | Codec | Saved as |
//! |-----------|-------|----------|
//! | `.tga` | `image` crate | uncompressed 32-bit truecolor, bottom-to-top |
//! | `.png` | `png` crate | RGBA, 8 bits per channel |
//!
//! Both decoders hand back rows top-to-bottom regardless of how the file
//! stores them, and every input layout is widened to RGBA8.

mod png;
mod tga;

use std::path::Path;

use raster_ops::PixelBuffer;

use crate::error::CodecError;

/// File formats the codec boundary understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Tga,
    Png,
}

impl Format {
    /// Pick the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("tga") => Ok(Format::Tga),
            Some("png") => Ok(Format::Png),
            _ => Err(CodecError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read the image at `path` into a new buffer.
pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer, CodecError> {
    let path = path.as_ref();
    let image = match Format::from_path(path)? {
        Format::Tga => tga::read(path)?,
        Format::Png => png::read(path)?,
    };
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}

/// Write `image` to `path`, replacing any existing file.
pub fn save(image: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();
    match Format::from_path(path)? {
        Format::Tga => tga::write(image, path)?,
        Format::Png => png::write(image, path)?,
    }
    tracing::info!(path = %path.display(), "Saved image");
    Ok(())
}
