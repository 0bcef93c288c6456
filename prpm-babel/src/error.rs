//! Error types for format operations
//!
//! Only two situations surface as errors from the conversion path: asking
//! the registry for something it does not have, and calling a converter
//! without configuration it requires. Malformed input degrades into a
//! valid-but-minimal document, and unrepresentable content degrades into
//! warnings on the conversion result; neither is an error.

use std::fmt;

/// Error that can occur during parsing or conversion dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Format exists but does not support the requested direction
    NotSupported(String),
    /// Source text could not be parsed (machine-written inputs only;
    /// human-authored formats never raise this)
    Parse(String),
    /// Error during conversion dispatch
    Conversion(String),
    /// Required converter configuration is absent. The one fail-fast case:
    /// guessing a default here would silently change target-editor behavior.
    MissingConfiguration { field: String, detail: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::NotSupported(msg) => write!(f, "{msg}"),
            FormatError::Parse(msg) => write!(f, "Parse error: {msg}"),
            FormatError::Conversion(msg) => write!(f, "Conversion error: {msg}"),
            FormatError::MissingConfiguration { field, detail } => {
                write!(f, "Missing required configuration '{field}': {detail}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_names_field() {
        let err = FormatError::MissingConfiguration {
            field: "fileMatchPattern".to_string(),
            detail: "fileMatch inclusion requires a pattern".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fileMatchPattern"));
        assert!(text.contains("Missing required configuration"));
    }

    #[test]
    fn test_format_not_found_display() {
        let err = FormatError::FormatNotFound("windsurf".to_string());
        assert_eq!(err.to_string(), "Format 'windsurf' not found");
    }
}
