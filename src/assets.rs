//! Where bundled color data comes from.
//!
//! The resolver never reaches into global storage. Callers hand it an
//! [`AssetSource`] that can produce the palette image, the route list and the
//! color tables by name.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Palette image consulted for routed nodes.
pub const PALETTE_IMAGE: &str = "unifieddyes_palette_extended.png";

/// Node names that resolve through the palette image.
pub const PALETTE_ROUTES: &str = "extended_palette.txt";

/// Color tables loaded by [`crate::ColorMapping::load_defaults`], in order.
///
/// Later files override earlier ones for the same node name.
pub const DEFAULT_COLOR_FILES: [&str; 10] = [
    "advtrains.txt",
    "custom.txt",
    "everness.txt",
    "mc2.txt",
    "miles.txt",
    "naturalbiomes.txt",
    "mtg.txt",
    "nodecore.txt",
    "scifi_nodes.txt",
    "vanessa.txt",
];

/// A named-blob store for bundled color data.
pub trait AssetSource {
    /// Read the asset called `name`.
    ///
    /// # Errors
    /// Returns an I/O error (usually `NotFound`) if the asset is unavailable.
    fn read(&self, name: &str) -> io::Result<Cow<'_, [u8]>>;
}

/// Assets stored as files in one directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn read(&self, name: &str) -> io::Result<Cow<'_, [u8]>> {
        // Asset names are flat file names; refuse anything that walks the tree.
        if name.contains(['/', '\\']) || name == ".." {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("asset name {name:?} is not a plain file name"),
            ));
        }
        std::fs::read(self.root.join(name)).map(Cow::Owned)
    }
}

/// Assets held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }

    /// Add or replace an asset.
    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), data.into());
    }
}

impl AssetSource for MemorySource {
    fn read(&self, name: &str) -> io::Result<Cow<'_, [u8]>> {
        self.files
            .get(name)
            .map(|data| Cow::Borrowed(data.as_slice()))
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no asset named {name:?}"))
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_roundtrip() {
        let src = MemorySource::new().with("mtg.txt", "default:stone 1 2 3");
        assert_eq!(&*src.read("mtg.txt").unwrap(), b"default:stone 1 2 3");
        assert_eq!(
            src.read("bogus.txt").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_dir_source_reads_files() {
        let dir = std::env::temp_dir().join(format!("colormapping-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("custom.txt"), "a:b 1 2 3\n").unwrap();

        let src = DirSource::new(&dir);
        assert_eq!(&*src.read("custom.txt").unwrap(), b"a:b 1 2 3\n");
        assert!(src.read("missing.txt").is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_dir_source_rejects_paths() {
        let src = DirSource::new(std::env::temp_dir());
        let err = src.read("../etc/passwd").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
