//! Format trait definition
//!
//! This module defines the core Format trait that all ecosystem
//! implementations must implement, together with the conversion result and
//! converter configuration types shared by every implementation.

use crate::error::FormatError;
use prpm_canonical::{CanonicalPackage, InclusionMode, PackageMeta};
use serde::{Deserialize, Serialize};

/// Result of converting a canonical package into one ecosystem's native form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// Native file text, ready to be written by the caller.
    pub content: String,
    /// Ecosystem id of the target format.
    pub format: String,
    /// Diagnostics: what could not be preserved, plus informational notices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// True when at least one section or field could not be represented.
    pub lossy_conversion: bool,
    /// 0-100 summary of how much of the source survived.
    pub quality_score: u8,
}

impl Conversion {
    /// A zero-score result for an internal conversion fault. The converter
    /// still returns a value; the fault message travels as a warning.
    pub fn faulted(format: impl Into<String>, fault: impl Into<String>) -> Self {
        Conversion {
            content: String::new(),
            format: format.into(),
            warnings: vec![fault.into()],
            lossy_conversion: true,
            quality_score: 0,
        }
    }
}

/// Converter-specific configuration, resolved by the caller.
///
/// Which fields matter depends on the target: cursor reads `globs` and
/// `always_apply`, kiro requires `inclusion` (plus `file_match_pattern` for
/// fileMatch mode) and honors `domain`. Unknown-to-a-target fields are
/// ignored by that target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion: Option<InclusionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_match_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_apply: Option<bool>,
}

/// Trait for ecosystem formats
///
/// Implementors provide parsing (native text → CanonicalPackage),
/// conversion (CanonicalPackage → native text + diagnostics), or both.
/// Implementations are stateless; one instance may serve concurrent callers.
pub trait Format: Send + Sync {
    /// The ecosystem id of this format (e.g. "cursor", "copilot")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Whether this format supports parsing (native text → canonical)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports conversion (canonical → native text)
    fn supports_conversion(&self) -> bool {
        false
    }

    /// Parse native text into a canonical package.
    ///
    /// Default implementation returns NotSupported. Human-authored formats
    /// must not fail on malformed input: worst case is a package holding
    /// only its metadata section.
    fn parse(&self, _source: &str, _meta: &PackageMeta) -> Result<CanonicalPackage, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Convert a canonical package into this format's native text.
    ///
    /// Default implementation returns NotSupported. Implementations never
    /// mutate the package, and only raise for missing required
    /// configuration; every other failure degrades into the returned
    /// Conversion's diagnostics.
    fn convert(
        &self,
        _package: &CanonicalPackage,
        _options: &ConvertOptions,
    ) -> Result<Conversion, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support conversion",
            self.name()
        )))
    }
}
