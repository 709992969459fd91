//! JavaScript bindings for browser map viewers.
//!
//! ```javascript
//! import init, { ColorResolver } from 'colormapping';
//! await init();
//! const resolver = new ColorResolver(paletteBytes, routeListBytes);
//! resolver.load(mtgColorsBytes);
//! resolver.resolve("default:stone", 0); // "#808080FF"
//! ```

use wasm_bindgen::prelude::*;

use crate::mapping::ColorMapping;

/// Color resolver handle exported to JavaScript.
#[wasm_bindgen]
pub struct ColorResolver {
    inner: ColorMapping,
}

#[wasm_bindgen]
impl ColorResolver {
    /// Build a resolver from the palette PNG and the route list.
    ///
    /// # Errors
    /// Returns an error string if the palette or route list is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(palette_png: &[u8], route_list: &[u8]) -> Result<ColorResolver, JsValue> {
        console_error_panic_hook::set_once();
        let inner = ColorMapping::from_bytes(palette_png, route_list)?;
        Ok(Self { inner })
    }

    /// Load a color table; returns the number of entries loaded.
    ///
    /// # Errors
    /// Returns an error string naming the first malformed line.
    pub fn load(&self, data: &[u8]) -> Result<u32, JsValue> {
        let count = self.inner.load_bytes(data)?;
        u32::try_from(count).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Resolve a node name to `#RRGGBBAA`, or `undefined` if unmapped.
    pub fn resolve(&self, name: &str, param2: i32) -> Option<String> {
        self.inner.resolve(name, param2).map(crate::Rgba::to_hex)
    }

    /// The color table as a JS `Map` of node name to `{r, g, b, a}`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Number of entries in the color table.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 {
        u32::try_from(self.inner.len()).unwrap_or(u32::MAX)
    }
}
