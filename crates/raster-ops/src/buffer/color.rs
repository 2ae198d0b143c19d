//! Texel types and the over-black conversion.

/// One RGB texel, channels in R, G, B order.
pub type Rgb8 = [u8; 3];

/// One RGBA texel, channels in R, G, B, A order.
pub type Rgba8 = [u8; 4];

/// Channel index of red within a texel.
pub const RED: usize = 0;
/// Channel index of green within a texel.
pub const GREEN: usize = 1;
/// Channel index of blue within a texel.
pub const BLUE: usize = 2;
/// Channel index of alpha within a texel.
pub const ALPHA: usize = 3;

/// Color a fully transparent texel resolves to.
pub const BACKGROUND: Rgb8 = [0, 0, 0];

/// Convert one RGBA texel to RGB as if composited over opaque black.
///
/// Color channels are stored premultiplied, so compositing over black means
/// dividing the alpha back out: each channel becomes
/// `floor(channel * 255 / alpha)`, clamped to `0..=255`. A fully transparent
/// texel yields [`BACKGROUND`].
///
/// # Example
///
/// ```
/// use raster_ops::composite_over_black;
///
/// assert_eq!(composite_over_black([10, 20, 30, 0]), [0, 0, 0]);
/// assert_eq!(composite_over_black([10, 20, 30, 255]), [10, 20, 30]);
/// assert_eq!(composite_over_black([64, 128, 200, 128]), [127, 255, 255]);
/// ```
#[inline]
pub fn composite_over_black(rgba: Rgba8) -> Rgb8 {
    let alpha = rgba[ALPHA];
    if alpha == 0 {
        return BACKGROUND;
    }

    let scale = 255.0_f32 / alpha as f32;
    let mut rgb = [0u8; 3];
    for c in [RED, GREEN, BLUE] {
        let value = (rgba[c] as f32 * scale).floor();
        rgb[c] = value.clamp(0.0, 255.0) as u8;
    }
    rgb
}
