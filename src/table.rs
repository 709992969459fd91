//! Parsers for the line-oriented text formats.
//!
//! Color tables hold one `name red green blue` entry per line. Route lists
//! hold one node name per line. Both skip blank lines and `#` comments.

use std::collections::HashSet;

use crate::color::Rgba;
use crate::error::{ColorMappingError, Result};

/// One parsed color-table line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry<'a> {
    pub name: &'a str,
    pub color: Rgba,
}

/// Strip surrounding whitespace and drop blank and comment lines.
fn content(raw: &str) -> Option<&str> {
    let txt = raw.trim();
    if txt.is_empty() || txt.starts_with('#') {
        None
    } else {
        Some(txt)
    }
}

/// Parse a channel value, wrapping to 8 bits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_channel(line: usize, field: &str, channel: &str) -> Result<u8> {
    field
        .parse::<i32>()
        .map(|v| v as u8)
        .map_err(|e| ColorMappingError::parse(line, format!("invalid {channel} value {field:?}: {e}")))
}

/// Parse one color-table line.
///
/// Returns `Ok(None)` for blank and comment lines. Fields past the fourth are
/// ignored. Entries are always opaque.
///
/// # Errors
/// Returns [`ColorMappingError::Parse`] carrying `line` when the line has
/// fewer than four fields or a channel is not an integer.
pub fn parse_color_line(line: usize, raw: &str) -> Result<Option<ColorEntry<'_>>> {
    let Some(txt) = content(raw) else {
        return Ok(None);
    };

    let mut fields = txt.split_whitespace();
    let (Some(name), Some(r), Some(g), Some(b)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ColorMappingError::parse(
            line,
            format!("expected `name red green blue`, got {txt:?}"),
        ));
    };

    let color = Rgba::opaque(
        parse_channel(line, r, "red")?,
        parse_channel(line, g, "green")?,
        parse_channel(line, b, "blue")?,
    );
    Ok(Some(ColorEntry { name, color }))
}

/// Lazily parse a color table, yielding entries in file order.
///
/// Line numbers are 1-based and count skipped lines.
pub fn color_entries(text: &str) -> impl Iterator<Item = Result<ColorEntry<'_>>> {
    text.lines()
        .enumerate()
        .filter_map(|(i, raw)| parse_color_line(i + 1, raw).transpose())
}

/// Parse a whole color table, stopping at the first malformed line.
///
/// # Errors
/// Returns the first [`ColorMappingError::Parse`] encountered.
pub fn parse_color_table(text: &str) -> Result<Vec<ColorEntry<'_>>> {
    color_entries(text).collect()
}

/// Parse a palette-route list into a set of node names.
pub fn parse_route_list(text: &str) -> HashSet<String> {
    text.lines().filter_map(content).map(str::to_string).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_parse_simple_line() {
        let entry = parse_color_line(1, "mymod:stone 10 20 30").unwrap().unwrap();
        assert_eq!(entry.name, "mymod:stone");
        assert_eq!(entry.color, Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn test_extra_fields_ignored() {
        // Some tables carry an alpha-looking fifth column; it is not used.
        let entry = parse_color_line(1, "default:water_source 39 66 106 128 extra")
            .unwrap()
            .unwrap();
        assert_eq!(entry.color, Rgba::opaque(39, 66, 106));
    }

    #[test]
    fn test_surrounding_whitespace_and_tabs() {
        let entry = parse_color_line(1, "  \tdefault:dirt\t95  64 39  ")
            .unwrap()
            .unwrap();
        assert_eq!(entry.name, "default:dirt");
        assert_eq!(entry.color, Rgba::opaque(95, 64, 39));
    }

    #[test]
    fn test_values_wrap_to_8_bits() {
        let entry = parse_color_line(1, "x:y 256 -1 511").unwrap().unwrap();
        assert_eq!(entry.color, Rgba::opaque(0, 255, 255));
    }

    #[test_case("" ; "empty")]
    #[test_case("    " ; "spaces")]
    #[test_case("# default:stone 1 2 3" ; "comment")]
    #[test_case("   # indented comment" ; "indented comment")]
    fn test_skipped_lines(raw: &str) {
        assert!(parse_color_line(3, raw).unwrap().is_none());
    }

    #[test_case("stuff" ; "one field")]
    #[test_case("my:node 1 2" ; "three fields")]
    #[test_case("my:node invalid_r 0 0" ; "bad red")]
    #[test_case("my:node 0 invalid_g 0" ; "bad green")]
    #[test_case("my:node 0 0 invalid_b" ; "bad blue")]
    #[test_case("my:node 0 0 1.5" ; "float")]
    #[test_case("my:node 0 0 99999999999" ; "overflow")]
    fn test_malformed_lines(raw: &str) {
        let err = parse_color_line(4, raw).unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_color_entries_line_numbers_count_skipped_lines() {
        let text = "# header\n\na:b 1 2 3\nbroken\n";
        let results: Vec<_> = color_entries(text).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err().line(), Some(4));
    }

    #[test]
    fn test_crlf_line_endings() {
        let entries = parse_color_table("a:b 1 2 3\r\nc:d 4 5 6\r\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "c:d");
    }

    #[test]
    fn test_parse_route_list() {
        let routes = parse_route_list(
            "unifiedbricks:brickblock_multicolor_dark\n\n  # comment\n  unifieddyes:concrete  \n",
        );
        assert_eq!(routes.len(), 2);
        assert!(routes.contains("unifiedbricks:brickblock_multicolor_dark"));
        assert!(routes.contains("unifieddyes:concrete"));
    }
}
