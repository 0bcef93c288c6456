//! Copilot serialization (canonical → project instructions)
//!
//! Emits plain heading-structured markdown with no front matter. Tool
//! lists render as an ordinary bulleted section: the target has no tool
//! semantics, but a plain list loses nothing.

use crate::format::{ConvertOptions, Conversion};
use crate::quality;
use crate::render;
use prpm_canonical::{CanonicalPackage, Section};

/// Convert a canonical package to Copilot project instructions.
///
/// Infallible: internal faults degrade to a zero-score result.
pub fn convert_to_copilot(package: &CanonicalPackage, _options: &ConvertOptions) -> Conversion {
    match render_document(package) {
        Ok((content, warnings)) => {
            let (lossy_conversion, quality_score) = quality::flat_score(&warnings);
            Conversion {
                content,
                format: "copilot".to_string(),
                warnings,
                lossy_conversion,
                quality_score,
            }
        }
        Err(fault) => Conversion::faulted("copilot", format!("Conversion failed: {fault}")),
    }
}

fn render_document(package: &CanonicalPackage) -> Result<(String, Vec<String>), String> {
    render::check_envelope(package)?;

    let mut blocks: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for section in package.sections() {
        match section {
            Section::Metadata {
                title,
                description,
                icon,
            } => blocks.push(render::metadata_block(title, description, icon.as_deref())),
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
            Section::Persona {
                name,
                role,
                icon,
                style,
                expertise,
            } => blocks.push(render::persona_block(
                name.as_deref(),
                role,
                icon.as_deref(),
                style,
                expertise,
            )),
            Section::Context { title, content } => {
                blocks.push(render::context_block(title, content))
            }
            Section::Tools { items } => {
                let list: Vec<String> = items.iter().map(|t| format!("- {t}")).collect();
                blocks.push(format!("## Available Tools\n\n{}", list.join("\n")));
            }
            Section::Custom {
                owning_ecosystem,
                content,
            } => {
                if render::custom_belongs_to(owning_ecosystem.as_deref(), "copilot") {
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

    Ok((render::join_blocks(&blocks), warnings))
}
