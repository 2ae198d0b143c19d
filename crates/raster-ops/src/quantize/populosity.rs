//! Populosity quantization: keep the most frequent colors.
//!
//! Colors are first coarsened to 5 bits per channel so near-identical shades
//! share a histogram bucket. The 256 fullest buckets become the palette, and
//! each pixel (at full precision) is replaced by the palette color nearest
//! to it in RGB space.

use std::collections::{BTreeMap, HashMap};

use crate::buffer::{PixelBuffer, Rgb8, BLUE, GREEN, RED};

/// Maximum number of palette entries retained.
pub const PALETTE_SIZE: usize = 256;

/// Mask applied to every channel before histogramming.
const BUCKET_MASK: u8 = 0xF8;

/// One palette color and the number of pixels whose bucket it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: Rgb8,
    pub frequency: u32,
}

/// Histogram key. Derived ordering is lexicographic R, then G, then B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Bucket {
    r: u8,
    g: u8,
    b: u8,
}

impl Bucket {
    #[inline]
    fn of(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r & BUCKET_MASK,
            g: g & BUCKET_MASK,
            b: b & BUCKET_MASK,
        }
    }
}

/// Build the populosity palette of `image`.
///
/// Entries are ordered by descending frequency. Buckets with equal counts
/// keep ascending color order. At most [`PALETTE_SIZE`] entries are
/// returned; fewer if the image has fewer distinct buckets, and none for an
/// empty image.
pub fn populosity_palette(image: &PixelBuffer) -> Vec<PaletteEntry> {
    let mut histogram: BTreeMap<Bucket, u32> = BTreeMap::new();
    for t in image.texels() {
        *histogram.entry(Bucket::of(t[RED], t[GREEN], t[BLUE])).or_insert(0) += 1;
    }

    let mut entries: Vec<PaletteEntry> = histogram
        .into_iter()
        .map(|(bucket, frequency)| PaletteEntry {
            color: [bucket.r, bucket.g, bucket.b],
            frequency,
        })
        .collect();

    // sort_by is stable, so ties stay in key order
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(PALETTE_SIZE);
    entries
}

/// Nearest palette color by squared Euclidean distance; first minimum wins.
fn nearest(palette: &[PaletteEntry], rgb: Rgb8) -> Rgb8 {
    let mut best = palette[0].color;
    let mut best_distance = u32::MAX;
    for entry in palette {
        let distance: u32 = (0..3)
            .map(|c| {
                let d = entry.color[c] as i32 - rgb[c] as i32;
                (d * d) as u32
            })
            .sum();
        if distance < best_distance {
            best_distance = distance;
            best = entry.color;
        }
    }
    best
}

impl PixelBuffer {
    /// Reduce the image to its (at most) 256 most popular colors.
    ///
    /// Alpha is untouched. An empty buffer is left as is.
    pub fn quantize_populosity(&mut self) {
        let palette = populosity_palette(self);
        if palette.is_empty() {
            return;
        }
        tracing::debug!(
            entries = palette.len(),
            top_frequency = palette[0].frequency,
            "populosity palette built"
        );

        // Distinct source colors are usually far fewer than pixels.
        let mut mapped: HashMap<Rgb8, Rgb8> = HashMap::new();
        for p in self.bytes_mut().chunks_exact_mut(4) {
            let source = [p[RED], p[GREEN], p[BLUE]];
            let target = *mapped
                .entry(source)
                .or_insert_with(|| nearest(&palette, source));
            p[..3].copy_from_slice(&target);
        }
    }
}
