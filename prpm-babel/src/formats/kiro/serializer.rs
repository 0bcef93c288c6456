//! Kiro serialization (canonical → steering file)
//!
//! Front matter declares the inclusion mode (plus a file-match pattern for
//! fileMatch mode); the body is markdown. Persona and tools have no
//! steering-file equivalent and are always dropped with lossy warnings.
//! Scoring is stepped: every loss costs points, so a heavily-trimmed
//! steering file reads as such.

use crate::error::FormatError;
use crate::format::{ConvertOptions, Conversion};
use crate::frontmatter;
use crate::quality;
use crate::render;
use prpm_canonical::{CanonicalPackage, InclusionMode, Section};

/// Convert a canonical package to a Kiro steering file.
///
/// Fails fast when the inclusion mode is missing, or when fileMatch mode
/// lacks a pattern. Every other problem degrades into diagnostics.
pub fn convert_to_kiro(
    package: &CanonicalPackage,
    options: &ConvertOptions,
) -> Result<Conversion, FormatError> {
    let inclusion = options
        .inclusion
        .ok_or_else(|| FormatError::MissingConfiguration {
            field: "inclusion".to_string(),
            detail: "kiro steering files declare when they apply (always, manual, or fileMatch)"
                .to_string(),
        })?;

    let pattern = options.file_match_pattern.as_deref().unwrap_or("");
    if inclusion == InclusionMode::FileMatch && pattern.is_empty() {
        return Err(FormatError::MissingConfiguration {
            field: "fileMatchPattern".to_string(),
            detail: "fileMatch inclusion requires a file pattern".to_string(),
        });
    }

    Ok(match render_document(package, options, inclusion) {
        Ok((content, warnings)) => {
            let (lossy_conversion, quality_score) = quality::stepped_score(&warnings);
            Conversion {
                content,
                format: "kiro".to_string(),
                warnings,
                lossy_conversion,
                quality_score,
            }
        }
        Err(fault) => Conversion::faulted("kiro", format!("Conversion failed: {fault}")),
    })
}

fn render_document(
    package: &CanonicalPackage,
    options: &ConvertOptions,
    inclusion: InclusionMode,
) -> Result<(String, Vec<String>), String> {
    render::check_envelope(package)?;

    let mut mapping = serde_yaml::Mapping::new();
    mapping.insert("inclusion".into(), inclusion.as_str().into());
    if inclusion == InclusionMode::FileMatch {
        if let Some(pattern) = &options.file_match_pattern {
            mapping.insert("fileMatchPattern".into(), pattern.clone().into());
        }
    }
    let front = frontmatter::emit(&mapping, &[]);

    let mut blocks: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if !has_description(package) {
        warnings.push("Package description skipped (none available)".to_string());
    }

    let mut saw_metadata = false;
    for section in package.sections() {
        match section {
            Section::Metadata {
                title,
                description,
                icon,
            } => {
                saw_metadata = true;
                let title = options.domain.as_deref().unwrap_or(title);
                blocks.push(render::metadata_block(title, description, icon.as_deref()));
            }
            Section::Instructions {
                title,
                content,
                priority,
            } => blocks.push(render::instructions_block(title, content, *priority)),
            Section::Rules {
                title,
                items,
                ordered,
            } => blocks.push(render::rules_block(title, items, *ordered)),
            Section::Examples { title, items } => {
                blocks.push(render::examples_block(title, items))
            }
            Section::Persona { .. } => {
                warnings.push(
                    "Persona section skipped (not supported in kiro steering files)".to_string(),
                );
            }
            Section::Context { title, content } => {
                blocks.push(render::context_block(title, content))
            }
            Section::Tools { .. } => {
                warnings.push(
                    "Tools section skipped (not supported in kiro steering files)".to_string(),
                );
            }
            Section::Custom {
                owning_ecosystem,
                content,
            } => {
                if render::custom_belongs_to(owning_ecosystem.as_deref(), "kiro") {
                    blocks.push(content.clone());
                } else {
                    warnings.push(format!(
                        "Custom section skipped ({}-specific)",
                        owning_ecosystem.as_deref().unwrap_or("unknown")
                    ));
                }
            }
        }
    }

    // A domain label still names the document when the package carried no
    // metadata section of its own.
    if !saw_metadata {
        if let Some(domain) = &options.domain {
            blocks.insert(0, format!("# {domain}"));
        }
    }

    let body = render::join_blocks(&blocks);
    let content = if body.is_empty() {
        front
    } else {
        format!("{front}\n{body}")
    };
    Ok((content, warnings))
}

fn has_description(package: &CanonicalPackage) -> bool {
    if !package.description.is_empty() {
        return true;
    }
    package.sections().iter().any(|s| {
        matches!(s, Section::Metadata { description, .. } if !description.is_empty())
    })
}
