//! Cursor parsing (.mdc rule file → canonical)
//!
//! Pipeline: raw text → front-matter split (native fields + `# prpm:`
//! extension recovery) → body scan → canonical package. Native fields with
//! no canonical home (`globs`, `alwaysApply`) ride in the package metadata
//! bag so a later conversion back to Cursor keeps them.

use crate::frontmatter;
use crate::heuristics;
use crate::scan;
use prpm_canonical::{CanonicalPackage, PackageMeta, Section};
use serde_json::json;

pub const TAXONOMY_ECOSYSTEM: &str = "cursor";
pub const TAXONOMY_KIND: &str = "rule";

/// Parse a Cursor rule file. Never fails; malformed front matter degrades
/// to "absent" with a notice in the package metadata.
pub fn parse_cursor_rule(source: &str, meta: &PackageMeta) -> CanonicalPackage {
    let (front, body) = frontmatter::extract(source);

    let extensions = front
        .as_ref()
        .map(|f| f.extensions.clone())
        .unwrap_or_default();

    let description = meta
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| {
            front
                .as_ref()
                .and_then(|f| f.get_str("description"))
                .filter(|d| !d.is_empty())
                .map(|d| d.to_string())
        })
        .or_else(|| scan::derive_description(body))
        .unwrap_or_default();

    let title = extensions
        .get("title")
        .cloned()
        .unwrap_or_else(|| meta.name.clone());

    let mut sections = vec![Section::Metadata {
        title,
        description: description.clone(),
        icon: None,
    }];
    sections.extend(scan::scan_sections(body));

    let mut package = CanonicalPackage::from_meta(meta, "cursor", sections);
    package.description = description;

    // Identity recovered from extension comments fills gaps the manifest
    // left open; explicit manifest values win.
    if package.version.is_empty() {
        if let Some(version) = extensions.get("version") {
            package.version = version.clone();
        }
    }
    if package.author.is_none() {
        package.author = extensions.get("author").cloned();
    }
    if let Some(tags) = extensions.get("tags") {
        for tag in tags.split(',') {
            let tag = tag.trim();
            if !tag.is_empty() {
                package.tags.insert(tag.to_string());
            }
        }
    }
    for tag in heuristics::infer_tags(body, "cursor") {
        package.tags.insert(tag);
    }

    package.metadata.insert(
        "taxonomy".to_string(),
        json!({ "ecosystem": TAXONOMY_ECOSYSTEM, "kind": TAXONOMY_KIND }),
    );

    if let Some(front) = &front {
        if front.malformed {
            package.metadata.insert(
                "frontMatterNotice".to_string(),
                json!("Front matter could not be parsed; treated as absent"),
            );
        }
        if let Some(globs) = front.get_str_seq("globs") {
            package
                .metadata
                .insert("globs".to_string(), json!(globs));
        }
        if let Some(always_apply) = front.get_bool("alwaysApply") {
            package
                .metadata
                .insert("alwaysApply".to_string(), json!(always_apply));
        }
    }

    package
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> PackageMeta {
        PackageMeta::new("pkg-1", "fallback-name")
    }

    #[test]
    fn test_recovers_extension_fields() {
        let source = "---\ndescription: Strict TS rules.\nalwaysApply: true\n# prpm:title: My Rules\n# prpm:version: 1.2.0\n# prpm:author: ada\n# prpm:tags: typescript, testing\n---\n# My Rules\n\nbody\n";
        let pkg = parse_cursor_rule(source, &meta());

        assert_eq!(pkg.version, "1.2.0");
        assert_eq!(pkg.author.as_deref(), Some("ada"));
        assert!(pkg.tags.contains("typescript"));
        assert!(pkg.tags.contains("testing"));
        match &pkg.sections()[0] {
            Section::Metadata { title, description, .. } => {
                assert_eq!(title, "My Rules");
                assert_eq!(description, "Strict TS rules.");
            }
            _ => unreachable!(),
        }
        assert_eq!(pkg.metadata["alwaysApply"], json!(true));
    }

    #[test]
    fn test_manifest_identity_wins_over_recovered() {
        let mut meta = meta();
        meta.version = "9.9.9".to_string();
        meta.author = Some("manifest-author".to_string());
        let source = "---\n# prpm:version: 1.0.0\n# prpm:author: comment-author\n---\nbody\n";
        let pkg = parse_cursor_rule(source, &meta);

        assert_eq!(pkg.version, "9.9.9");
        assert_eq!(pkg.author.as_deref(), Some("manifest-author"));
    }

    #[test]
    fn test_globs_pass_through_metadata_bag() {
        let source = "---\nglobs:\n  - \"**/*.ts\"\n  - \"**/*.tsx\"\n---\nbody\n";
        let pkg = parse_cursor_rule(source, &meta());
        assert_eq!(pkg.metadata["globs"], json!(["**/*.ts", "**/*.tsx"]));
    }

    #[test]
    fn test_no_front_matter_still_parses() {
        let source = "# Just a body\n\nWith content.\n";
        let pkg = parse_cursor_rule(source, &meta());
        assert_eq!(pkg.source_format, "cursor");
        assert!(pkg.sections().len() > 1);
    }
}
