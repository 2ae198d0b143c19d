//! Test fixtures: small deterministic images and scratch directories.

use std::path::{Path, PathBuf};

use raster_ops::PixelBuffer;
use tempfile::TempDir;

/// Texel values used by the fixtures
pub mod colors {
    pub const OPAQUE_RED: [u8; 4] = [255, 0, 0, 255];
    pub const HALF_GREEN: [u8; 4] = [0, 128, 0, 128];
    pub const ORANGE: [u8; 4] = [200, 100, 50, 255];
    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
}

/// Horizontal gray ramp, opaque, `width` x `height`.
pub fn gray_ramp(width: u32, height: u32) -> PixelBuffer {
    let mut image = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8;
            image.set_pixel(x, y, [v, v, v, 255]);
        }
    }
    image
}

/// Every texel different, with varying alpha.
pub fn patterned(width: u32, height: u32) -> PixelBuffer {
    let mut image = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(
                x,
                y,
                [
                    (x * 37 + y * 11) as u8,
                    (x * 5 + y * 71) as u8,
                    (x * y * 3) as u8,
                    (255 - ((x + y) * 7) % 256) as u8,
                ],
            );
        }
    }
    image
}

/// Single-color image.
pub fn solid(width: u32, height: u32, texel: [u8; 4]) -> PixelBuffer {
    let mut image = PixelBuffer::new(width, height);
    image.fill(texel);
    image
}

/// Scratch directory, removed when dropped.
pub fn scratch() -> TempDir {
    tempfile::tempdir().expect("Should create temp dir")
}

/// Save `image` under `dir/name` and return the path.
pub fn write_image(dir: &Path, name: &str, image: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    rasterkit::codec::save(image, &path).expect("Should save fixture image");
    path
}

/// Write a pipeline file under `dir/name` and return the path.
pub fn write_pipeline(dir: &Path, name: &str, yaml: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, yaml).expect("Should write pipeline file");
    path
}

/// Write an uncompressed 32-bit TGA by hand. `data` is BGRA in file order.
pub fn write_raw_tga(
    dir: &Path,
    name: &str,
    width: u16,
    height: u16,
    descriptor: u8,
    data: &[u8],
) -> PathBuf {
    let mut bytes = vec![0u8; 18];
    bytes[2] = 2;
    bytes[12..14].copy_from_slice(&width.to_le_bytes());
    bytes[14..16].copy_from_slice(&height.to_le_bytes());
    bytes[16] = 32;
    bytes[17] = descriptor;
    bytes.extend_from_slice(data);
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Should write TGA fixture");
    path
}
