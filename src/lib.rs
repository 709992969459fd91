//! colormapping - node colors for map renderers
//!
//! Resolves block/node names such as `default:stone` to RGBA colors:
//! - Exact matches from line-oriented color tables
//! - Palette-colored nodes looked up by `param2` in an extended palette image
//! - Name heuristics (`wool:dark_green`, `mymod:my_red_node`) for unmapped nodes
//!
//! # Usage
//!
//! ```no_run
//! use colormapping::{ColorMapping, DirSource};
//!
//! # fn main() -> colormapping::Result<()> {
//! let assets = DirSource::new("colors");
//! let mapping = ColorMapping::from_assets(&assets)?;
//! mapping.load_defaults(&assets)?;
//!
//! if let Some(c) = mapping.resolve("default:stone", 0) {
//!     println!("{}", c.to_hex());
//! }
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod color;
pub mod error;
pub mod mapping;
pub mod named;
pub mod options;
pub mod palette;
pub mod table;
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use assets::{AssetSource, DirSource, MemorySource};
pub use color::Rgba;
pub use error::{ColorMappingError, Result};
pub use mapping::ColorMapping;
pub use options::ResolverOptions;
pub use palette::ExtendedPalette;
pub use wasm::ColorResolver;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
