//! Truevision TGA through the `image` crate.
//!
//! Saved files are uncompressed 32-bit truecolor (image type 2) with the
//! rows stored bottom-to-top, the format's default origin.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::tga::TgaEncoder;
use image::{ExtendedColorType, ImageFormat};
use raster_ops::PixelBuffer;

use crate::error::CodecError;

/// Offset of the image descriptor byte in the header
const DESCRIPTOR: usize = 17;

/// Descriptor bit selecting a top-left origin
const TOP_LEFT_ORIGIN: u8 = 0x20;

pub(super) fn read(path: &Path) -> Result<PixelBuffer, CodecError> {
    let reader = BufReader::new(File::open(path)?);
    let rgba = image::load(reader, ImageFormat::Tga)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::from_vec(width, height, rgba.into_raw())?)
}

pub(super) fn write(image: &PixelBuffer, path: &Path) -> Result<(), CodecError> {
    let encoded = encode(image)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&encoded)?;
    writer.flush()?;
    Ok(())
}

/// Raw bottom-up TGA bytes for `image`.
fn encode(image: &PixelBuffer) -> Result<Vec<u8>, CodecError> {
    let stride = image.width() as usize * 4;
    let mut bottom_up = Vec::with_capacity(image.as_bytes().len());
    if stride > 0 {
        for row in image.as_bytes().chunks_exact(stride).rev() {
            bottom_up.extend_from_slice(row);
        }
    }

    let mut encoded = Vec::new();
    TgaEncoder::new(&mut encoded).disable_rle().encode(
        &bottom_up,
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;

    // the encoder always declares top-left; the rows above are bottom-up
    if let Some(descriptor) = encoded.get_mut(DESCRIPTOR) {
        *descriptor &= !TOP_LEFT_ORIGIN;
    }
    Ok(encoded)
}
