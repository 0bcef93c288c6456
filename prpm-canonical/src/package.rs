//! Package envelope
//!
//! A CanonicalPackage is the unit of conversion. It is constructed once per
//! conversion call, immutable after construction, and discarded once the
//! converter returns; persistence is the registry's concern, not this
//! subsystem's.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Package identity supplied by the manifest/metadata layer.
///
/// Parsers never derive identity themselves; the caller resolves it and
/// passes it alongside the raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageMeta {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PackageMeta {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        PackageMeta {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

fn canonical_format() -> String {
    "canonical".to_string()
}

fn canonical_version() -> String {
    "1.0".to_string()
}

/// The ordered body of a canonical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalContent {
    /// Always "canonical"; checked by converters as an envelope sanity test.
    #[serde(default = "canonical_format")]
    pub format: String,
    /// Model version, currently "1.0".
    #[serde(default = "canonical_version")]
    pub version: String,
    /// Reading order. Preserved through every conversion.
    pub sections: Vec<Section>,
}

impl CanonicalContent {
    pub fn new(sections: Vec<Section>) -> Self {
        CanonicalContent {
            format: canonical_format(),
            version: canonical_version(),
            sections,
        }
    }
}

/// The unit of conversion: identity plus canonical content.
///
/// Ordered collections (BTreeSet/BTreeMap) keep serialization and rendering
/// deterministic, which the idempotence contract depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPackage {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// The ecosystem the content was parsed from, or "canonical" when
    /// hand-built.
    pub source_format: String,
    /// Ecosystem-specific passthrough fields not otherwise modeled
    /// (inclusion mode, glob lists, editor taxonomy, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub content: CanonicalContent,
}

impl CanonicalPackage {
    /// Assemble a package from caller identity and parsed sections.
    pub fn from_meta(
        meta: &PackageMeta,
        source_format: impl Into<String>,
        sections: Vec<Section>,
    ) -> Self {
        CanonicalPackage {
            id: meta.id.clone(),
            version: meta.version.clone(),
            name: meta.name.clone(),
            description: meta.description.clone().unwrap_or_default(),
            author: meta.author.clone(),
            tags: meta.tags.iter().cloned().collect(),
            source_format: source_format.into(),
            metadata: BTreeMap::new(),
            content: CanonicalContent::new(sections),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.content.sections
    }
}
