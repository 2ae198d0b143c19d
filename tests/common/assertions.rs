//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;
use raster_ops::PixelBuffer;

/// Assert both buffers have the same size and texels
pub fn assert_same_image(actual: &PixelBuffer, expected: &PixelBuffer) {
    assert_eq!(
        actual.dimensions(),
        expected.dimensions(),
        "Image dimensions differ"
    );
    assert_eq!(actual.as_bytes(), expected.as_bytes(), "Image texels differ");
}

/// Assert every texel's color channels are 0 or 255 and R == G == B
pub fn assert_black_and_white(image: &PixelBuffer) {
    for (i, t) in image.texels().enumerate() {
        assert!(
            (t[0] == 0 || t[0] == 255) && t[0] == t[1] && t[1] == t[2],
            "Texel {} is not black or white: {:?}",
            i,
            t
        );
    }
}

/// Assert every texel has alpha 255
pub fn assert_opaque(image: &PixelBuffer) {
    assert!(
        image.texels().all(|t| t[3] == 255),
        "Expected every texel to be opaque"
    );
}

/// Assert the file starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path).expect("Should read output file");
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG file, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the file is an uncompressed 32-bit truecolor TGA stored bottom-to-top
pub fn assert_tga_truecolor_file(path: &Path, width: u16, height: u16) {
    let bytes = std::fs::read(path).expect("Should read output file");
    assert!(bytes.len() >= 18, "TGA file too short: {} bytes", bytes.len());
    assert_eq!(bytes[2], 2, "Expected uncompressed truecolor TGA");
    assert_eq!(u16::from_le_bytes([bytes[12], bytes[13]]), width);
    assert_eq!(u16::from_le_bytes([bytes[14], bytes[15]]), height);
    assert_eq!(bytes[16], 32, "Expected 32 bits per pixel");
    assert_eq!(bytes[17] & 0x20, 0, "Expected bottom-left origin");
    assert_eq!(
        bytes.len(),
        18 + bytes[0] as usize + width as usize * height as usize * 4,
        "Unexpected TGA file length"
    );
}
