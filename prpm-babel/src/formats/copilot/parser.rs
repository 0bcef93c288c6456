//! Copilot parsing (project instructions → canonical)
//!
//! Pipeline: raw text → front-matter split → body scan → canonical package.
//! The package always opens with exactly one metadata section built from
//! the caller-supplied identity plus a derived description.

use crate::frontmatter;
use crate::heuristics;
use crate::scan;
use prpm_canonical::{CanonicalPackage, PackageMeta, Section};
use serde_json::json;

/// Fixed editor-facing taxonomy for this parser. Constant by design: the
/// classification names the source file kind, not anything inferred from
/// the content.
pub const TAXONOMY_ECOSYSTEM: &str = "project-instructions";
pub const TAXONOMY_KIND: &str = "rule";

/// Parse a Copilot project-instructions document.
///
/// Never fails: malformed front matter is treated as absent (with a notice
/// recorded in the package metadata for the caller to surface), and an
/// empty or unstructured body yields a package holding only its metadata
/// section.
pub fn parse_project_instructions(source: &str, meta: &PackageMeta) -> CanonicalPackage {
    let (front, body) = frontmatter::extract(source);

    let description = meta
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| {
            front
                .as_ref()
                .and_then(|f| f.get_str("description").map(|s| s.to_string()))
        })
        .or_else(|| scan::derive_description(body))
        .unwrap_or_default();

    let mut sections = vec![Section::Metadata {
        title: meta.name.clone(),
        description: description.clone(),
        icon: None,
    }];
    sections.extend(scan::scan_sections(body));

    let mut package = CanonicalPackage::from_meta(meta, "copilot", sections);
    package.description = description;

    for tag in heuristics::infer_tags(body, "copilot") {
        package.tags.insert(tag);
    }

    package.metadata.insert(
        "taxonomy".to_string(),
        json!({ "ecosystem": TAXONOMY_ECOSYSTEM, "kind": TAXONOMY_KIND }),
    );

    if let Some(front) = front {
        if front.malformed {
            package.metadata.insert(
                "frontMatterNotice".to_string(),
                json!("Front matter could not be parsed; treated as absent"),
            );
        } else if let Some(mapping) = &front.mapping {
            // Passthrough: keys this model does not represent stay available
            // to a later converter.
            for (key, value) in mapping {
                if let (Some(key), Ok(value)) = (
                    key.as_str(),
                    serde_json::to_value(value),
                ) {
                    package.metadata.insert(key.to_string(), value);
                }
            }
        }
    }

    package
}
