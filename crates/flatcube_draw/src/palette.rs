//! Sticker-to-color lookup.

use std::collections::BTreeMap;

use flatcube_core::Sticker;
use serde::{Deserialize, Serialize};

use crate::{NetCell, Rgb};

const DEFAULT_PALETTE_STR: &str = include_str!("default_palette.yaml");

lazy_static! {
    /// The canonical palette: white, yellow, orange, red, green, and blue
    /// stickers at full saturation; black filler.
    pub static ref DEFAULT_PALETTE: Palette =
        serde_norway::from_str(DEFAULT_PALETTE_STR).expect("error loading default palette");
}

/// Mapping from sticker colors to display colors.
///
/// The `empty` entry colors the filler cells around the cross in an
/// unfolded net; it doubles as the fallback for any sticker a custom
/// palette forgets to mention.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Display color for each sticker.
    pub stickers: BTreeMap<Sticker, Rgb>,
    /// Filler and fallback color.
    pub empty: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE.clone()
    }
}

impl Palette {
    /// Returns the display color for one net cell.
    pub fn color(&self, cell: NetCell) -> Rgb {
        match cell {
            NetCell::Sticker(sticker) => self.stickers.get(&sticker).copied().unwrap_or(self.empty),
            NetCell::Empty => self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_palette_covers_every_sticker() {
        use flatcube_core::strum::IntoEnumIterator;

        assert_eq!(DEFAULT_PALETTE.stickers.len(), Sticker::COUNT);
        for sticker in Sticker::iter() {
            assert_ne!(
                DEFAULT_PALETTE.color(NetCell::Sticker(sticker)),
                DEFAULT_PALETTE.empty,
                "{sticker}"
            );
        }
    }

    #[test]
    fn test_canonical_assignments() {
        assert_eq!(DEFAULT_PALETTE.color(NetCell::Sticker(Sticker::White)), Rgb::WHITE);
        assert_eq!(
            DEFAULT_PALETTE.color(NetCell::Sticker(Sticker::Orange)),
            Rgb { rgb: [255, 165, 0] }
        );
        assert_eq!(DEFAULT_PALETTE.color(NetCell::Empty), Rgb::BLACK);
    }
}
