//! Color-count reduction.
//!
//! - **Uniform**: fixed bit masks per channel, 3-3-2 bits for R-G-B
//! - **Populosity**: the 256 most frequent colors of a 5-bit-per-channel
//!   histogram, with every pixel mapped to its nearest palette entry

mod populosity;
mod uniform;

pub use populosity::{populosity_palette, PaletteEntry, PALETTE_SIZE};
pub use uniform::{BLUE_MASK, RED_GREEN_MASK};
