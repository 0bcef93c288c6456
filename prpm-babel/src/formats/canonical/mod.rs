//! Canonical format implementation
//!
//! This module implements the Format trait for the canonical model itself,
//! treating it as just another format in the system. This creates a uniform
//! API where a stored canonical JSON document moves through the same
//! interface as any native editor file.

use crate::error::FormatError;
use crate::format::{ConvertOptions, Conversion, Format};
use prpm_canonical::{CanonicalPackage, PackageMeta};

/// Format implementation for the canonical JSON envelope
///
/// Unlike the human-authored formats, parsing here is strict: the input is
/// machine-written, so a malformed envelope is a real error rather than
/// something to degrade around.
pub struct CanonicalFormat;

impl Format for CanonicalFormat {
    fn name(&self) -> &str {
        "canonical"
    }

    fn description(&self) -> &str {
        "Canonical package model as JSON"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_conversion(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, _meta: &PackageMeta) -> Result<CanonicalPackage, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::Parse(e.to_string()))
    }

    fn convert(
        &self,
        package: &CanonicalPackage,
        _options: &ConvertOptions,
    ) -> Result<Conversion, FormatError> {
        let mut content = serde_json::to_string_pretty(package)
            .map_err(|e| FormatError::Conversion(e.to_string()))?;
        content.push('\n');

        Ok(Conversion {
            content,
            format: "canonical".to_string(),
            warnings: vec![],
            lossy_conversion: false,
            quality_score: 100,
        })
    }
}
