use crate::buffer::{PixelBuffer, Rgba8};

/// One disc stamp centered on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub radius: u32,
    pub x: u32,
    pub y: u32,
    pub color: Rgba8,
}

impl Stroke {
    pub fn new(radius: u32, x: u32, y: u32, color: Rgba8) -> Self {
        Self {
            radius,
            x,
            y,
            color,
        }
    }
}

impl PixelBuffer {
    /// Stamp `stroke` onto the buffer.
    ///
    /// Texels with `dx² + dy² <= r²` take the stroke color on all four
    /// channels. The one-texel shell at `dx² + dy² == r² + 1` is averaged
    /// with the stroke color (truncating, alpha included). Targets outside
    /// the buffer are skipped.
    pub fn paint_stroke(&mut self, stroke: &Stroke) {
        if self.is_empty() {
            return;
        }
        let (width, height) = (self.width() as i64, self.height() as i64);
        let r = stroke.radius as i64;
        let r2 = (r as i128) * (r as i128);
        let (cx, cy) = (stroke.x as i64, stroke.y as i64);

        // only offsets that land inside the buffer
        let (dy_min, dy_max) = ((-r).max(-cy), r.min(height - 1 - cy));
        let (dx_min, dx_max) = ((-r).max(-cx), r.min(width - 1 - cx));

        for dy in dy_min..=dy_max {
            let y = (cy + dy) as u32;
            for dx in dx_min..=dx_max {
                let x = (cx + dx) as u32;
                let d2 = (dx as i128) * (dx as i128) + (dy as i128) * (dy as i128);
                if d2 <= r2 {
                    self.set_pixel(x, y, stroke.color);
                } else if d2 == r2 + 1 {
                    let old = self.pixel(x, y);
                    let mut blended = [0u8; 4];
                    for c in 0..4 {
                        blended[c] = ((old[c] as u16 + stroke.color[c] as u16) / 2) as u8;
                    }
                    self.set_pixel(x, y, blended);
                }
            }
        }
    }
}
