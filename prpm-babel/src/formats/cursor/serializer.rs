//! Cursor serialization (canonical → .mdc rule file)
//!
//! The front-matter block carries only what Cursor's tooling recognizes;
//! PRPM identity with no native field (title, version, author, tags) is
//! preserved as comment lines in the same block. Tool sections have no
//! Cursor equivalent and are dropped with a lossy warning.

use crate::format::{ConvertOptions, Conversion};
use crate::frontmatter;
use crate::quality;
use crate::render;
use prpm_canonical::{CanonicalPackage, Section};

/// Convert a canonical package to a Cursor rule file.
///
/// Infallible: cursor needs no required configuration, and internal faults
/// degrade to a zero-score result.
pub fn convert_to_cursor(package: &CanonicalPackage, options: &ConvertOptions) -> Conversion {
    match render_document(package, options) {
        Ok((content, warnings)) => {
            let (lossy_conversion, quality_score) = quality::flat_score(&warnings);
            Conversion {
                content,
                format: "cursor".to_string(),
                warnings,
                lossy_conversion,
                quality_score,
            }
        }
        Err(fault) => Conversion::faulted("cursor", format!("Conversion failed: {fault}")),
    }
}

fn render_document(
    package: &CanonicalPackage,
    options: &ConvertOptions,
) -> Result<(String, Vec<String>), String> {
    render::check_envelope(package)?;

    let front = front_matter(package, options);

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
            Section::Tools { .. } => {
                warnings.push(format!(
                    "Tools section skipped ({}-specific)",
                    package.source_format
                ));
            }
            Section::Custom {
                owning_ecosystem,
                content,
            } => {
                if render::custom_belongs_to(owning_ecosystem.as_deref(), "cursor") {
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

    let body = render::join_blocks(&blocks);
    let content = if body.is_empty() {
        front
    } else {
        format!("{front}\n{body}")
    };
    Ok((content, warnings))
}

/// Build the `.mdc` front-matter block: native fields as YAML, PRPM-only
/// identity as `# prpm:` comment lines.
fn front_matter(package: &CanonicalPackage, options: &ConvertOptions) -> String {
    let mut mapping = serde_yaml::Mapping::new();

    let description = if package.description.is_empty() {
        metadata_description(package).unwrap_or_default()
    } else {
        package.description.clone()
    };
    mapping.insert("description".into(), description.into());

    let globs = options.globs.clone().or_else(|| {
        package.metadata.get("globs").and_then(|v| {
            v.as_array().map(|a| {
                a.iter()
                    .filter_map(|g| g.as_str().map(|s| s.to_string()))
                    .collect()
            })
        })
    });
    if let Some(globs) = globs {
        let seq: serde_yaml::Sequence = globs.into_iter().map(serde_yaml::Value::from).collect();
        mapping.insert("globs".into(), serde_yaml::Value::Sequence(seq));
    }

    let always_apply = options
        .always_apply
        .or_else(|| package.metadata.get("alwaysApply").and_then(|v| v.as_bool()))
        .unwrap_or(false);
    mapping.insert("alwaysApply".into(), always_apply.into());

    let mut extensions: Vec<(String, String)> = Vec::new();
    let title = metadata_title(package).unwrap_or(&package.name);
    if !title.is_empty() {
        extensions.push(("title".to_string(), title.to_string()));
    }
    if !package.version.is_empty() {
        extensions.push(("version".to_string(), package.version.clone()));
    }
    if let Some(author) = &package.author {
        extensions.push(("author".to_string(), author.clone()));
    }
    if !package.tags.is_empty() {
        let tags: Vec<&str> = package.tags.iter().map(String::as_str).collect();
        extensions.push(("tags".to_string(), tags.join(", ")));
    }

    frontmatter::emit(&mapping, &extensions)
}

fn metadata_title(package: &CanonicalPackage) -> Option<&String> {
    package.sections().iter().find_map(|s| match s {
        Section::Metadata { title, .. } => Some(title),
        _ => None,
    })
}

fn metadata_description(package: &CanonicalPackage) -> Option<String> {
    package.sections().iter().find_map(|s| match s {
        Section::Metadata { description, .. } if !description.is_empty() => {
            Some(description.clone())
        }
        _ => None,
    })
}
