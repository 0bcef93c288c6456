//! Cursor rule-file format (`.mdc`)
//!
//! YAML front matter carrying the fields Cursor's own tooling reads
//! (`description`, `globs`, `alwaysApply`), a markdown body, and PRPM
//! extension fields riding as comment lines inside the front-matter block
//! so a round trip can recover them without confusing Cursor's parser.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{ConvertOptions, Conversion, Format};
use prpm_canonical::{CanonicalPackage, PackageMeta};

/// Format implementation for Cursor rule files
pub struct CursorFormat;

impl Format for CursorFormat {
    fn name(&self) -> &str {
        "cursor"
    }

    fn description(&self) -> &str {
        "Cursor .mdc rule file"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_conversion(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, meta: &PackageMeta) -> Result<CanonicalPackage, FormatError> {
        Ok(parser::parse_cursor_rule(source, meta))
    }

    fn convert(
        &self,
        package: &CanonicalPackage,
        options: &ConvertOptions,
    ) -> Result<Conversion, FormatError> {
        Ok(serializer::convert_to_cursor(package, options))
    }
}
