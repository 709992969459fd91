//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Amount subtracted from each channel for `dark_` variants.
pub const DEFAULT_DARK_SHADE: u8 = 30;

/// Tunables for [`crate::ColorMapping`].
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverOptions {
    /// Channel amount subtracted for dark variants.
    pub dark_shade: u8,
    /// Carry the base color's alpha through darkening instead of zeroing it.
    pub keep_dark_alpha: bool,
    /// Store heuristic matches in the color table.
    pub memoize: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            dark_shade: DEFAULT_DARK_SHADE,
            keep_dark_alpha: false,
            memoize: true,
        }
    }
}

impl ResolverOptions {
    /// Parse options from a JSON document.
    ///
    /// # Errors
    /// Returns the serde error if the document is not a valid options object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            ResolverOptions::from_json("{}").unwrap(),
            ResolverOptions::default()
        );
    }

    #[test]
    fn test_partial_json() {
        let opts = ResolverOptions::from_json(r#"{"keepDarkAlpha": true, "darkShade": 50}"#)
            .unwrap();
        assert!(opts.keep_dark_alpha);
        assert_eq!(opts.dark_shade, 50);
        assert!(opts.memoize);
    }

    #[test]
    fn test_invalid_json() {
        assert!(ResolverOptions::from_json(r#"{"darkShade": 300}"#).is_err());
        assert!(ResolverOptions::from_json("not json").is_err());
    }
}
