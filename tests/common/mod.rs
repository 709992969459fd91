//! Common test utilities and assertion helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use colormapping::{ColorMapping, Rgba};

// Re-export fixtures for convenience
pub use super::fixtures::*;

/// Resolver built from the default fixture assets with all default tables loaded.
#[must_use]
pub fn loaded_mapping() -> ColorMapping {
    let assets = AssetsBuilder::new()
        .file("scifi_nodes.txt", SCIFI_NODES_TXT)
        .file("mtg.txt", MTG_TXT)
        .build();
    let mapping = ColorMapping::from_assets(&assets).expect("build mapping");
    mapping.load_defaults(&assets).expect("load defaults");
    mapping
}

/// Assert that `name` resolves to exactly `(r, g, b, a)`.
pub fn assert_resolves(mapping: &ColorMapping, name: &str, param2: i32, expected: [u8; 4]) {
    let got = mapping
        .resolve(name, param2)
        .unwrap_or_else(|| panic!("{name} did not resolve"));
    assert_eq!(
        got,
        Rgba::from(expected),
        "{name} (param2 {param2}) resolved to {}",
        got.to_hex()
    );
}

/// Assert that `name` does not resolve at all.
pub fn assert_unresolved(mapping: &ColorMapping, name: &str) {
    if let Some(c) = mapping.resolve(name, 0) {
        panic!("{name} unexpectedly resolved to {}", c.to_hex());
    }
}
