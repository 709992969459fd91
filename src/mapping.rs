//! Node name to color resolution.
//!
//! Resolution runs in three tiers:
//! 1. names in the palette-route set are looked up in the extended palette by
//!    `param2` and never touch the table
//! 2. exact match in the color table
//! 3. base-color heuristic on the name (`_red`, `dark_green`, ...), with hits
//!    written back to the table so the next lookup takes tier 2

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::assets::{AssetSource, DEFAULT_COLOR_FILES, PALETTE_IMAGE, PALETTE_ROUTES};
use crate::color::Rgba;
use crate::error::{ColorMappingError, Result};
use crate::named::{self, Shade};
use crate::options::ResolverOptions;
use crate::palette::ExtendedPalette;
use crate::table;

/// Thread-safe color resolver.
///
/// Share it between render workers behind an `Arc`; every method takes
/// `&self`.
#[derive(Debug)]
pub struct ColorMapping {
    colors: RwLock<HashMap<String, Rgba>>,
    palette_routes: HashSet<String>,
    palette: ExtendedPalette,
    options: ResolverOptions,
}

impl ColorMapping {
    /// Build a resolver from the palette image and the route list.
    ///
    /// The color table starts empty; fill it with [`Self::load_bytes`] or
    /// [`Self::load_defaults`].
    ///
    /// # Errors
    /// Returns [`ColorMappingError::Format`] if the palette is not a PNG and
    /// [`ColorMappingError::Encoding`] if the route list is not UTF-8.
    pub fn from_bytes(palette_png: &[u8], route_list: &[u8]) -> Result<Self> {
        let palette = ExtendedPalette::from_png(palette_png)?;
        let palette_routes = table::parse_route_list(std::str::from_utf8(route_list)?);
        log::info!(
            "color mapping ready: {} palette entries, {} palette-routed nodes",
            palette.len(),
            palette_routes.len()
        );
        Ok(Self::from_parts(palette, palette_routes))
    }

    /// Build a resolver from the bundled palette and route list in `source`.
    ///
    /// # Errors
    /// Returns [`ColorMappingError::Asset`] if either asset is missing, or
    /// any error from [`Self::from_bytes`].
    pub fn from_assets(source: &dyn AssetSource) -> Result<Self> {
        let palette_png = read_asset(source, PALETTE_IMAGE)?;
        let route_list = read_asset(source, PALETTE_ROUTES)?;
        Self::from_bytes(&palette_png, &route_list)
    }

    /// Build a resolver from already decoded parts.
    pub fn from_parts(palette: ExtendedPalette, palette_routes: HashSet<String>) -> Self {
        Self {
            colors: RwLock::new(HashMap::new()),
            palette_routes,
            palette,
            options: ResolverOptions::default(),
        }
    }

    /// Replace the resolver options.
    #[must_use]
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// The extended palette used for routed nodes.
    pub fn palette(&self) -> &ExtendedPalette {
        &self.palette
    }

    /// Whether `name` resolves through the extended palette.
    pub fn is_palette_routed(&self, name: &str) -> bool {
        self.palette_routes.contains(name)
    }

    /// Resolve a node name to a color.
    ///
    /// `param2` is only used for palette-routed nodes. Returns `None` when
    /// nothing matches; callers should leave such nodes unrendered.
    pub fn resolve(&self, name: &str, param2: i32) -> Option<Rgba> {
        if self.is_palette_routed(name) {
            return Some(self.palette.get_color(param2));
        }

        if let Some(c) = self.colors.read().get(name) {
            return Some(*c);
        }

        let color = self.guess(name)?;
        if self.options.memoize {
            log::debug!("memoizing heuristic color {} for {name}", color.to_hex());
            self.colors.write().insert(name.to_string(), color);
        }
        Some(color)
    }

    /// Exact table lookup only, no palette and no heuristic.
    pub fn get(&self, name: &str) -> Option<Rgba> {
        self.colors.read().get(name).copied()
    }

    /// Base-color heuristic for names missing from the table.
    fn guess(&self, name: &str) -> Option<Rgba> {
        let (_, base, shade) = named::find_match(name)?;
        Some(match shade {
            Shade::Dark => base.darken(self.options.dark_shade, self.options.keep_dark_alpha),
            Shade::Normal => base,
        })
    }

    /// Load a color table, overwriting existing entries with the same name.
    ///
    /// Entries are inserted as they are parsed. On error, entries from lines
    /// before the malformed one stay in the table.
    ///
    /// # Errors
    /// Returns [`ColorMappingError::Parse`] with the 1-based line number of
    /// the first malformed line, or [`ColorMappingError::Encoding`] if the
    /// buffer is not UTF-8.
    pub fn load_bytes(&self, buffer: &[u8]) -> Result<usize> {
        let text = std::str::from_utf8(buffer)?;
        let mut count = 0;
        for entry in table::color_entries(text) {
            let entry = entry?;
            self.colors.write().insert(entry.name.to_string(), entry.color);
            count += 1;
        }
        log::debug!("loaded {count} color table entries");
        Ok(count)
    }

    /// Load one color table file from `source`.
    ///
    /// # Errors
    /// Returns [`ColorMappingError::Asset`] if the file cannot be read, or
    /// any error from [`Self::load_bytes`].
    pub fn load_asset(&self, source: &dyn AssetSource, name: &str) -> Result<usize> {
        let data = read_asset(source, name)?;
        self.load_bytes(&data).inspect_err(|e| log::warn!("color table {name}: {e}"))
    }

    /// Load every table in [`DEFAULT_COLOR_FILES`], in order.
    ///
    /// Returns the total number of entries loaded.
    ///
    /// # Errors
    /// Stops at and returns the first error from [`Self::load_asset`].
    pub fn load_defaults(&self, source: &dyn AssetSource) -> Result<usize> {
        let mut total = 0;
        for name in DEFAULT_COLOR_FILES {
            total += self.load_asset(source, name)?;
        }
        log::info!("loaded {total} default color entries");
        Ok(total)
    }

    /// Copy of the color table at this point in time.
    ///
    /// Includes memoized heuristic matches but never palette-routed names.
    pub fn snapshot(&self) -> HashMap<String, Rgba> {
        self.colors.read().clone()
    }

    /// Number of entries in the color table.
    pub fn len(&self) -> usize {
        self.colors.read().len()
    }

    /// Whether the color table is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.read().is_empty()
    }
}

fn read_asset<'a>(source: &'a dyn AssetSource, name: &str) -> Result<std::borrow::Cow<'a, [u8]>> {
    source.read(name).map_err(|e| ColorMappingError::Asset {
        name: name.to_string(),
        source: e,
    })
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
    use crate::assets::MemorySource;
    use std::sync::Arc;

    fn mapping() -> ColorMapping {
        let palette = ExtendedPalette::from_colors(vec![
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 255, 0),
            Rgba::new(0, 0, 255, 128),
        ]);
        let routes = ["unifiedbricks:brickblock_multicolor_dark".to_string()]
            .into_iter()
            .collect();
        ColorMapping::from_parts(palette, routes)
    }

    #[test]
    fn test_exact_match_wins_over_heuristic() {
        let m = mapping();
        m.load_bytes(b"mymod:my_red_node 1 2 3").unwrap();
        assert_eq!(
            m.resolve("mymod:my_red_node", 0),
            Some(Rgba::opaque(1, 2, 3))
        );
    }

    #[test]
    fn test_palette_route_uses_param2() {
        let m = mapping();
        let name = "unifiedbricks:brickblock_multicolor_dark";
        for idx in 0..3 {
            assert_eq!(m.resolve(name, idx), Some(m.palette().get_color(idx)));
        }
        assert_eq!(m.resolve(name, 2), Some(Rgba::new(0, 0, 255, 128)));
        assert!(m.is_empty(), "palette routes must not be memoized");
    }

    #[test]
    fn test_palette_route_ignores_table() {
        let m = mapping();
        m.load_bytes(b"unifiedbricks:brickblock_multicolor_dark 9 9 9")
            .unwrap();
        assert_eq!(
            m.resolve("unifiedbricks:brickblock_multicolor_dark", 1),
            Some(Rgba::opaque(0, 255, 0))
        );
    }

    #[test]
    fn test_palette_route_out_of_range() {
        let m = mapping();
        assert_eq!(
            m.resolve("unifiedbricks:brickblock_multicolor_dark", 100),
            Some(Rgba::default())
        );
    }

    #[test]
    fn test_heuristic_is_memoized() {
        let m = mapping();
        assert_eq!(m.get("mymod:my_red_node"), None);
        let first = m.resolve("mymod:my_red_node", 0);
        assert_eq!(first, Some(Rgba::opaque(107, 54, 53)));
        assert_eq!(m.get("mymod:my_red_node"), first);
        assert_eq!(m.resolve("mymod:my_red_node", 0), first);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_dark_variant_drops_alpha() {
        let m = mapping();
        assert_eq!(
            m.resolve("mymod:my_dark_red_node", 0),
            Some(Rgba::new(107 - 30, 54 - 30, 53 - 30, 0))
        );
    }

    #[test]
    fn test_dark_variant_with_options() {
        let m = mapping().with_options(ResolverOptions {
            dark_shade: 40,
            keep_dark_alpha: true,
            memoize: true,
        });
        assert_eq!(
            m.resolve("wool:brown_dark", 0),
            Some(Rgba::new(8, 0, 0, 255))
        );
    }

    #[test]
    fn test_memoize_disabled() {
        let m = mapping().with_options(ResolverOptions {
            memoize: false,
            ..ResolverOptions::default()
        });
        assert!(m.resolve("wool:blue_block", 0).is_some());
        assert!(m.is_empty());
    }

    #[test]
    fn test_unknown_name_is_none() {
        let m = mapping();
        assert_eq!(m.resolve("qqzz:totallyunknown", 0), None);
        assert!(m.is_empty());
    }

    #[test]
    fn test_load_bytes_keeps_entries_before_error() {
        let m = mapping();
        let err = m
            .load_bytes(b"# tiles\na:one 1 1 1\na:two 2 2 2\nmymod:node bad 0 0\na:three 3 3 3\n")
            .unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert_eq!(m.get("a:one"), Some(Rgba::opaque(1, 1, 1)));
        assert_eq!(m.get("a:two"), Some(Rgba::opaque(2, 2, 2)));
        assert_eq!(m.get("mymod:node"), None);
        assert_eq!(m.get("a:three"), None);
    }

    #[test]
    fn test_load_bytes_overwrites() {
        let m = mapping();
        assert_eq!(m.load_bytes(b"a:b 1 2 3\na:b 4 5 6\n").unwrap(), 2);
        assert_eq!(m.get("a:b"), Some(Rgba::opaque(4, 5, 6)));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_load_bytes_rejects_invalid_utf8() {
        let m = mapping();
        let err = m.load_bytes(&[0x61, 0x20, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, ColorMappingError::Encoding(_)));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let m = mapping();
        m.load_bytes(b"a:b 1 2 3").unwrap();
        let snap = m.snapshot();
        m.load_bytes(b"c:d 4 5 6").unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(m.snapshot().len(), 2);
    }

    #[test]
    fn test_load_defaults_reports_missing_file() {
        let m = mapping();
        let src = MemorySource::new().with("advtrains.txt", "advtrains:track 10 10 10\n");
        let err = m.load_defaults(&src).unwrap_err();
        assert!(
            matches!(err, ColorMappingError::Asset { ref name, .. } if name == "custom.txt"),
            "unexpected error: {err}"
        );
        assert_eq!(m.get("advtrains:track"), Some(Rgba::opaque(10, 10, 10)));
    }

    #[test]
    fn test_load_defaults_later_files_override() {
        let m = mapping();
        let mut src = MemorySource::new();
        for name in DEFAULT_COLOR_FILES {
            src.insert(name, "");
        }
        src.insert("mtg.txt", "default:stone 1 1 1\ndefault:dirt 2 2 2\n");
        src.insert("vanessa.txt", "default:stone 9 9 9\n");

        assert_eq!(m.load_defaults(&src).unwrap(), 3);
        assert_eq!(m.get("default:stone"), Some(Rgba::opaque(9, 9, 9)));
    }

    #[test]
    fn test_concurrent_resolve() {
        let m = Arc::new(mapping());
        m.load_bytes(b"default:stone 128 128 128").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let m = Arc::clone(&m);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        assert_eq!(
                            m.resolve("default:stone", 0),
                            Some(Rgba::opaque(128, 128, 128))
                        );
                        assert_eq!(
                            m.resolve("wool:dark_green", i),
                            Some(Rgba::new(63, 82, 40, 0))
                        );
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(m.len(), 2);
    }
}
