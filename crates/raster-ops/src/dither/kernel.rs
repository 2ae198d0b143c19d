//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` to a not-yet-visited neighbor and the
/// numerator of the share of error it receives. Offsets are written for a
/// left-to-right scan; right-to-left rows mirror `dx`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries.
    pub entries: &'static [(i32, i32, u8)],

    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,

    /// Deepest row offset in `entries`; the error buffer keeps `max_dy + 1` rows.
    pub max_dy: usize,
}

impl Kernel {
    /// Weight of each entry as a fraction of the error.
    pub fn weights(&self) -> impl Iterator<Item = (i32, i32, f32)> + '_ {
        let divisor = self.divisor as f32;
        self.entries
            .iter()
            .map(move |&(dx, dy, w)| (dx, dy, w as f32 / divisor))
    }
}

/// Floyd-Steinberg kernel, 100% propagation.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagates_everything() {
        let total: u32 = FLOYD_STEINBERG.entries.iter().map(|e| e.2 as u32).sum();
        assert_eq!(total, FLOYD_STEINBERG.divisor as u32);
    }

    #[test]
    fn test_entries_only_reach_unvisited_pixels() {
        for &(dx, dy, _) in FLOYD_STEINBERG.entries {
            assert!(dy > 0 || dx > 0, "({}, {}) points backwards", dx, dy);
            assert!(dy as usize <= FLOYD_STEINBERG.max_dy);
        }
    }
}
