//! Tile colours.

use rustc_hash::FxHashMap;

use crate::core::Tile;

/// An sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour table for tiles, text and background.
#[derive(Clone, Debug)]
pub struct Palette {
    tiles: FxHashMap<Tile, Rgb>,
    /// Colour for values missing from the table (above the largest entry).
    overflow: Rgb,
    /// Text on dark tiles (values above 4).
    pub light_text: Rgb,
    /// Text on light tiles and on the background.
    pub dark_text: Rgb,
    /// Board background.
    pub background: Rgb,
}

impl Palette {
    /// The classic 2048 colours.
    #[must_use]
    pub fn classic() -> Self {
        let tiles = [
            (0, Rgb(205, 193, 180)),
            (2, Rgb(238, 228, 218)),
            (4, Rgb(237, 224, 200)),
            (8, Rgb(242, 177, 121)),
            (16, Rgb(245, 149, 99)),
            (32, Rgb(246, 124, 95)),
            (64, Rgb(246, 94, 59)),
            (128, Rgb(237, 207, 114)),
            (256, Rgb(237, 204, 97)),
            (512, Rgb(237, 200, 80)),
            (1024, Rgb(237, 197, 63)),
            (2048, Rgb(237, 194, 46)),
        ]
        .into_iter()
        .collect();

        Self {
            tiles,
            overflow: Rgb(237, 194, 46),
            light_text: Rgb(249, 246, 242),
            dark_text: Rgb(119, 110, 101),
            background: Rgb(187, 173, 160),
        }
    }

    /// Fill colour for a tile value.
    #[must_use]
    pub fn tile(&self, value: Tile) -> Rgb {
        self.tiles.get(&value).copied().unwrap_or(self.overflow)
    }

    /// Text colour for a tile value: light on tiles above 4, dark otherwise.
    #[must_use]
    pub fn text(&self, value: Tile) -> Rgb {
        if value > 4 {
            self.light_text
        } else {
            self.dark_text
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
