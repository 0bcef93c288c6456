//! Format registry for format discovery and dispatch
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by ecosystem id; parsing and
//! conversion dispatch through it so callers never hold concrete format
//! types.

use crate::error::FormatError;
use crate::format::{ConvertOptions, Conversion, Format};
use prpm_canonical::{CanonicalPackage, PackageMeta};
use std::collections::HashMap;

/// Registry of ecosystem formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let pkg = registry.parse(source, "copilot", &meta)?;
/// let out = registry.convert(&pkg, "cursor", &ConvertOptions::default())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by ecosystem id
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available ecosystem ids (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse native text using the specified format
    pub fn parse(
        &self,
        source: &str,
        format: &str,
        meta: &PackageMeta,
    ) -> Result<CanonicalPackage, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source, meta)
    }

    /// Convert a canonical package using the specified format
    pub fn convert(
        &self,
        package: &CanonicalPackage,
        format: &str,
        options: &ConvertOptions,
    ) -> Result<Conversion, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_conversion() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support conversion"
            )));
        }
        fmt.convert(package, options)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::canonical::CanonicalFormat);
        registry.register(crate::formats::copilot::CopilotFormat);
        registry.register(crate::formats::cursor::CursorFormat);
        registry.register(crate::formats::kiro::KiroFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
