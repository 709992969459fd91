//! Structured error types for colormapping.
//!
//! Absence of a color is not an error: [`crate::ColorMapping::resolve`]
//! returns `None` for names it cannot map.

/// All errors that can occur while building a resolver or loading color data.
#[derive(Debug, thiserror::Error)]
pub enum ColorMappingError {
    /// Palette bytes are not a decodable image.
    #[error("Palette image: {0}")]
    Format(#[from] image::ImageError),

    /// A line of a color table or route list is malformed.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A text buffer is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// An asset could not be read from its source.
    #[error("Asset {name}: {source}")]
    Asset {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorMappingError>;

impl ColorMappingError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// The 1-based line number for parse errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<ColorMappingError> for wasm_bindgen::JsValue {
    fn from(e: ColorMappingError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_reports_line() {
        let err = ColorMappingError::parse(7, "expected 4 fields");
        assert_eq!(err.line(), Some(7));
        assert_eq!(
            err.to_string(),
            "Parse error on line 7: expected 4 fields"
        );
    }

    #[test]
    fn test_asset_error_has_no_line() {
        let err = ColorMappingError::Asset {
            name: "mtg.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.line(), None);
        assert!(err.to_string().starts_with("Asset mtg.txt"));
    }
}
