//! Markdown rendering helpers shared by the converters
//!
//! Each helper renders one section variant into a markdown block. The
//! converters own the skip/warn policy and the front matter; the block
//! shapes are shared so that the same canonical section reads the same in
//! every markdown-based target.

use prpm_canonical::{CanonicalPackage, Example, Priority, Rule};

/// Envelope sanity check applied by every converter before rendering.
///
/// The canonical content wrapper is machine-written; a wrong `format` tag
/// means the caller handed over something that never went through the
/// model, and rendering it would produce garbage with a perfect score.
pub fn check_envelope(package: &CanonicalPackage) -> Result<(), String> {
    if package.content.format != "canonical" {
        return Err(format!(
            "canonical content expected, found format '{}'",
            package.content.format
        ));
    }
    if !package.content.version.starts_with("1.") {
        return Err(format!(
            "unsupported canonical model version '{}'",
            package.content.version
        ));
    }
    Ok(())
}

/// `# Title` block with optional icon prefix and description paragraph.
pub fn metadata_block(title: &str, description: &str, icon: Option<&str>) -> String {
    let mut block = String::from("# ");
    if let Some(icon) = icon {
        block.push_str(icon);
        block.push(' ');
    }
    block.push_str(title);
    if !description.is_empty() {
        block.push_str("\n\n");
        block.push_str(description);
    }
    block
}

/// `## Title` block with an importance marker for high-priority guidance.
pub fn instructions_block(title: &str, content: &str, priority: Option<Priority>) -> String {
    let mut block = format!("## {title}\n\n");
    if priority == Some(Priority::High) {
        block.push_str("**Important:**\n\n");
    }
    block.push_str(content);
    block
}

/// `## Title` block with one line per rule, numbered or bulleted by the
/// section's ordered flag, plus indented rationale and example lines.
pub fn rules_block(title: &str, items: &[Rule], ordered: bool) -> String {
    let mut block = format!("## {title}\n");
    for (index, rule) in items.iter().enumerate() {
        if ordered {
            block.push_str(&format!("\n{}. {}", index + 1, rule.content));
        } else {
            block.push_str(&format!("\n- {}", rule.content));
        }
        if let Some(rationale) = &rule.rationale {
            block.push_str(&format!("\n   *{rationale}*"));
        }
        for example in &rule.examples {
            block.push_str(&format!("\n   Example: `{example}`"));
        }
    }
    block
}

/// `## Title` block with a `###` sub-heading and fenced code per sample.
pub fn examples_block(title: &str, items: &[Example]) -> String {
    let mut parts = vec![format!("## {title}")];
    for example in items {
        let marker = if example.is_good() {
            "✅ Good:"
        } else {
            "❌ Bad:"
        };
        parts.push(format!("### {} {}", marker, example.description));
        parts.push(format!(
            "```{}\n{}\n```",
            example.language.as_deref().unwrap_or_default(),
            example.code
        ));
    }
    parts.join("\n\n")
}

/// `## Role` block: identity line, style line, expertise list.
pub fn persona_block(
    name: Option<&str>,
    role: &str,
    icon: Option<&str>,
    style: &[String],
    expertise: &[String],
) -> String {
    let mut identity = String::new();
    if let Some(icon) = icon {
        identity.push_str(icon);
        identity.push(' ');
    }
    match name {
        Some(name) => identity.push_str(&format!("**{name}**: {role}")),
        None => identity.push_str(role),
    }

    let mut parts = vec!["## Role".to_string(), identity];
    if !style.is_empty() {
        parts.push(format!("**Style:** {}", style.join(", ")));
    }
    if !expertise.is_empty() {
        let list: Vec<String> = expertise.iter().map(|e| format!("- {e}")).collect();
        parts.push(format!("**Expertise:**\n{}", list.join("\n")));
    }
    parts.join("\n\n")
}

/// `## Title` block with free text.
pub fn context_block(title: &str, content: &str) -> String {
    format!("## {title}\n\n{content}")
}

/// Whether a custom section belongs in the given target's output.
pub fn custom_belongs_to(owning_ecosystem: Option<&str>, target: &str) -> bool {
    match owning_ecosystem {
        None => true,
        Some(owner) => owner == target,
    }
}

/// Assemble rendered blocks into the final document body.
pub fn join_blocks(blocks: &[String]) -> String {
    let mut body = blocks.join("\n\n");
    if !body.is_empty() {
        body.push('\n');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use prpm_canonical::{CanonicalPackage, PackageMeta};

    #[test]
    fn test_unordered_rules_use_bullets() {
        let items = vec![Rule::new("First"), Rule::new("Second"), Rule::new("Third")];
        let block = rules_block("Guidelines", &items, false);
        assert!(block.contains("- First"));
        assert!(block.contains("- Third"));
        assert!(!block.contains("1."));
    }

    #[test]
    fn test_ordered_rules_use_ordinals() {
        let items = vec![Rule::new("First"), Rule::new("Second")];
        let block = rules_block("Steps", &items, true);
        assert!(block.contains("1. First"));
        assert!(block.contains("2. Second"));
    }

    #[test]
    fn test_rule_rationale_and_examples_are_indented() {
        let mut rule = Rule::new("Prefer const");
        rule.rationale = Some("reassignment hides bugs".to_string());
        rule.examples.push("const x = 1;".to_string());
        let block = rules_block("Guidelines", &[rule], false);
        assert!(block.contains("\n   *reassignment hides bugs*"));
        assert!(block.contains("\n   Example: `const x = 1;`"));
    }

    #[test]
    fn test_examples_block_markers() {
        let items = vec![
            Example {
                description: "validated input".to_string(),
                code: "check(x)".to_string(),
                language: Some("ts".to_string()),
                good: None,
            },
            Example {
                description: "missing assertions".to_string(),
                code: "it('works', () => {})".to_string(),
                language: Some("ts".to_string()),
                good: Some(false),
            },
        ];
        let block = examples_block("Examples", &items);
        assert!(block.contains("### ✅ Good: validated input"));
        assert!(block.contains("### ❌ Bad: missing assertions"));
        assert!(block.contains("```ts\ncheck(x)\n```"));
    }

    #[test]
    fn test_persona_block_shape() {
        let block = persona_block(
            Some("Ada"),
            "Senior reviewer",
            Some("🔧"),
            &["terse".to_string(), "direct".to_string()],
            &["rust".to_string()],
        );
        assert!(block.starts_with("## Role"));
        assert!(block.contains("🔧 **Ada**: Senior reviewer"));
        assert!(block.contains("**Style:** terse, direct"));
        assert!(block.contains("**Expertise:**\n- rust"));
    }

    #[test]
    fn test_metadata_block_with_icon() {
        let block = metadata_block("My Rules", "Strict TS.", Some("📘"));
        assert_eq!(block, "# 📘 My Rules\n\nStrict TS.");
    }

    #[test]
    fn test_custom_ownership() {
        assert!(custom_belongs_to(None, "cursor"));
        assert!(custom_belongs_to(Some("cursor"), "cursor"));
        assert!(!custom_belongs_to(Some("windsurf"), "cursor"));
    }

    #[test]
    fn test_envelope_check_rejects_foreign_wrapper() {
        let mut pkg = CanonicalPackage::from_meta(&PackageMeta::new("p", "P"), "canonical", vec![]);
        pkg.content.format = "mystery".to_string();
        assert!(check_envelope(&pkg).is_err());
        pkg.content.format = "canonical".to_string();
        pkg.content.version = "2.0".to_string();
        assert!(check_envelope(&pkg).is_err());
        pkg.content.version = "1.0".to_string();
        assert!(check_envelope(&pkg).is_ok());
    }
}
