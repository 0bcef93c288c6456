//! Copilot project-instructions format
//!
//! Plain heading-structured markdown with no required front matter. This is
//! the least specific of the markdown dialects, which makes its parser the
//! reference implementation of the shared body scanner: everything is
//! inferred from headings, list shapes, and fences.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{ConvertOptions, Conversion, Format};
use prpm_canonical::{CanonicalPackage, PackageMeta};

/// Format implementation for Copilot project instructions
pub struct CopilotFormat;

impl Format for CopilotFormat {
    fn name(&self) -> &str {
        "copilot"
    }

    fn description(&self) -> &str {
        "Copilot project-instructions markdown"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_conversion(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, meta: &PackageMeta) -> Result<CanonicalPackage, FormatError> {
        // Human-authored input: parsing never fails, worst case is a
        // metadata-only package.
        Ok(parser::parse_project_instructions(source, meta))
    }

    fn convert(
        &self,
        package: &CanonicalPackage,
        options: &ConvertOptions,
    ) -> Result<Conversion, FormatError> {
        Ok(serializer::convert_to_copilot(package, options))
    }
}
