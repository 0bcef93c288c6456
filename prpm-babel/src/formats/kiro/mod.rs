//! Kiro steering-file format
//!
//! Convert-only. A steering file must declare when it applies, so the
//! caller has to supply an inclusion mode; guessing one here would change
//! editor behavior silently, which is the one failure this subsystem
//! refuses to paper over.

pub mod serializer;

use crate::error::FormatError;
use crate::format::{ConvertOptions, Conversion, Format};
use prpm_canonical::CanonicalPackage;

/// Format implementation for Kiro steering files
pub struct KiroFormat;

impl Format for KiroFormat {
    fn name(&self) -> &str {
        "kiro"
    }

    fn description(&self) -> &str {
        "Kiro steering file"
    }

    fn supports_conversion(&self) -> bool {
        true
    }

    fn convert(
        &self,
        package: &CanonicalPackage,
        options: &ConvertOptions,
    ) -> Result<Conversion, FormatError> {
        serializer::convert_to_kiro(package, options)
    }
}
