//! Extended palette decoded from an indexed palette image.
//!
//! The image is read as one flat run of pixels: rows top to bottom, each row
//! left to right. Entry `i` of the palette is pixel `i` of that run.

use crate::color::Rgba;
use crate::error::Result;

/// An ordered, immutable table of palette colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedPalette {
    colors: Vec<Rgba>,
}

impl ExtendedPalette {
    /// Decode a PNG (indexed or true color) into a palette.
    ///
    /// # Errors
    /// Returns [`crate::ColorMappingError::Format`] if the bytes are not a
    /// decodable image.
    pub fn from_png(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
        let rgba = img.to_rgba8();
        let colors: Vec<Rgba> = rgba.pixels().map(|px| Rgba::from(*px)).collect();
        log::debug!(
            "decoded extended palette: {}x{} -> {} entries",
            rgba.width(),
            rgba.height(),
            colors.len()
        );
        Ok(Self { colors })
    }

    /// Build a palette from already decoded entries.
    pub fn from_colors(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    /// Color at `index`, or transparent black when out of range.
    pub fn get_color(&self, index: i32) -> Rgba {
        let entry = usize::try_from(index)
            .ok()
            .and_then(|i| self.colors.get(i))
            .copied();
        entry.unwrap_or_else(|| {
            log::trace!(
                "palette index {index} out of range (len {})",
                self.colors.len()
            );
            Rgba::default()
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &Rgba> {
        self.colors.iter()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(img: &image::RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn test_row_major_order() {
        // 3 wide, 2 tall: index = y * 3 + x
        let img = image::RgbaImage::from_fn(3, 2, |x, y| {
            image::Rgba([x as u8, y as u8, (y * 3 + x) as u8, 255])
        });
        let palette = ExtendedPalette::from_png(&encode_png(&img)).unwrap();

        assert_eq!(palette.len(), 6);
        assert_eq!(palette.get_color(0), Rgba::new(0, 0, 0, 255));
        assert_eq!(palette.get_color(2), Rgba::new(2, 0, 2, 255));
        assert_eq!(palette.get_color(3), Rgba::new(0, 1, 3, 255));
        assert_eq!(palette.get_color(5), Rgba::new(2, 1, 5, 255));
    }

    #[test]
    fn test_rgb_image_becomes_opaque() {
        let img = image::RgbImage::from_pixel(2, 1, image::Rgb([10, 20, 30]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        let palette = ExtendedPalette::from_png(&out.into_inner()).unwrap();

        assert_eq!(palette.get_color(1), Rgba::opaque(10, 20, 30));
    }

    #[test]
    fn test_out_of_range_is_transparent_black() {
        let palette = ExtendedPalette::from_colors(vec![Rgba::opaque(1, 2, 3)]);
        assert_eq!(palette.get_color(1), Rgba::default());
        assert_eq!(palette.get_color(-1), Rgba::default());
        assert_eq!(palette.get_color(i32::MAX), Rgba::default());
    }

    #[test]
    fn test_invalid_bytes_are_format_error() {
        let err = ExtendedPalette::from_png(b"definitely not a png").unwrap_err();
        assert!(matches!(err, crate::ColorMappingError::Format(_)));
    }

    #[test]
    fn test_empty_palette() {
        let palette = ExtendedPalette::default();
        assert!(palette.is_empty());
        assert_eq!(palette.get_color(0), Rgba::default());
    }
}
