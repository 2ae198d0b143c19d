//! PNG through the `png` crate.
//!
//! Palette, low bit depth and 16-bit inputs are normalized by the decoder's
//! `EXPAND | STRIP_16` transformations; gray and RGB layouts are then widened
//! to RGBA here.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use raster_ops::PixelBuffer;

use crate::error::CodecError;

pub(super) fn read(path: &Path) -> Result<PixelBuffer, CodecError> {
    let mut decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let rgba = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        // EXPAND turns palette images into RGB or RGBA
        png::ColorType::Indexed => return Err(CodecError::UnsupportedFormat(path.to_path_buf())),
    };

    Ok(PixelBuffer::from_vec(info.width, info.height, rgba)?)
}

pub(super) fn write(image: &PixelBuffer, path: &Path) -> Result<(), CodecError> {
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(file, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_bytes())?;
    writer.finish()?;
    Ok(())
}
