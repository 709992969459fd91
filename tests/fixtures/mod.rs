//! Test fixtures for building color assets in memory.
//!
//! # Example
//!
//! ```rust,ignore
//! use fixtures::{PaletteBuilder, AssetsBuilder};
//!
//! let png = PaletteBuilder::new(16).fill(|i| [i as u8, 0, 0, 255]).build();
//! let assets = AssetsBuilder::new().palette(png).routes(&["dye:node"]).build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use std::io::Cursor;

use colormapping::assets::{DEFAULT_COLOR_FILES, PALETTE_IMAGE, PALETTE_ROUTES};
use colormapping::MemorySource;

/// Routed node used throughout the tests.
pub const ROUTED_NODE: &str = "unifiedbricks:brickblock_multicolor_dark";

/// A slice of a real-world color table.
pub const SCIFI_NODES_TXT: &str = "\
# scifi_nodes
scifi_nodes:blacktile2 20 20 20
scifi_nodes:white2 230 230 230
scifi_nodes:greenmetal 88 119 64
";

pub const MTG_TXT: &str = "\
default:stone 128 128 128
default:dirt 95 64 39

# water keeps its original 5th column
default:river_water_flowing 39 90 106 128
homedecor:piano 61 61 61
";

/// Builds a PNG palette laid out as rows of `width` entries.
pub struct PaletteBuilder {
    width: u32,
    entries: Vec<[u8; 4]>,
}

impl PaletteBuilder {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            entries: Vec::new(),
        }
    }

    /// Append one entry.
    pub fn push(mut self, rgba: [u8; 4]) -> Self {
        self.entries.push(rgba);
        self
    }

    /// Append `count` entries produced by `f(index)`.
    pub fn fill(mut self, count: usize, f: impl Fn(usize) -> [u8; 4]) -> Self {
        let start = self.entries.len();
        self.entries.extend((start..start + count).map(f));
        self
    }

    /// Encode to PNG. A short last row is padded with transparent black.
    pub fn build(self) -> Vec<u8> {
        let height = (self.entries.len() as u32).div_ceil(self.width).max(1);
        let img = image::RgbaImage::from_fn(self.width, height, |x, y| {
            let idx = (y * self.width + x) as usize;
            image::Rgba(self.entries.get(idx).copied().unwrap_or([0, 0, 0, 0]))
        });
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .expect("encode palette png");
        out.into_inner()
    }
}

/// The 256-entry palette used by most tests: entry `i` is `(i, 255 - i, i / 2, 255)`.
pub fn gradient_palette() -> Vec<u8> {
    PaletteBuilder::new(16)
        .fill(256, |i| [i as u8, 255 - i as u8, (i / 2) as u8, 255])
        .build()
}

/// Builds a [`MemorySource`] with every bundled file present.
pub struct AssetsBuilder {
    source: MemorySource,
}

impl AssetsBuilder {
    /// All default tables present but empty, gradient palette, one routed node.
    pub fn new() -> Self {
        let mut source = MemorySource::new()
            .with(PALETTE_IMAGE, gradient_palette())
            .with(PALETTE_ROUTES, format!("{ROUTED_NODE}\n"));
        for name in DEFAULT_COLOR_FILES {
            source.insert(name, "");
        }
        Self { source }
    }

    pub fn palette(mut self, png: Vec<u8>) -> Self {
        self.source.insert(PALETTE_IMAGE, png);
        self
    }

    pub fn routes(mut self, names: &[&str]) -> Self {
        self.source.insert(PALETTE_ROUTES, names.join("\n"));
        self
    }

    pub fn file(mut self, name: &str, contents: &str) -> Self {
        self.source.insert(name, contents);
        self
    }

    pub fn build(self) -> MemorySource {
        self.source
    }
}

impl Default for AssetsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
