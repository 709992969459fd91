//! RGBA color value and the channel arithmetic used by name heuristics.

use serde::{Deserialize, Serialize};

/// RGBA color with u8 components.
///
/// `Default` is fully transparent black `(0, 0, 0, 0)`, which is also what an
/// out-of-range palette lookup yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Subtract `amount` from each of r, g and b, saturating at zero.
    ///
    /// Alpha is reset to 0 unless `keep_alpha` is set. Dark variants in the
    /// shipped map output were produced without alpha, so that is the default.
    #[must_use]
    pub const fn darken(self, amount: u8, keep_alpha: bool) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: if keep_alpha { self.a } else { 0 },
        }
    }

    /// Convert to hex string (#RRGGBBAA).
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }

    /// Parse from a hex string, with or without `#`.
    ///
    /// Accepts `RRGGBB` (opaque) and `RRGGBBAA`. Returns None if the format
    /// is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
        };
        match hex.len() {
            6 => Some(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Raw channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(px: image::Rgba<u8>) -> Self {
        Self::from(px.0)
    }
}
