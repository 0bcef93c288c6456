//! Section and marker heuristics shared by the markdown-based parsers
//!
//! Heading classification is an ordered, first-match-wins rule list rather
//! than a scoring model. Ambiguous titles ("Examples of Rules") resolve by
//! rule priority, which keeps the behavior predictable and testable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordinal list marker: "1. ", "12) "
static ORDINAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,3}[.)]\s+").unwrap());

/// Backtick-quoted inline code, first occurrence
static INLINE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Canonical section kind a heading can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Rules,
    Examples,
    Context,
    Instructions,
}

const EXAMPLES_KEYWORDS: &[&str] = &["example", "sample", "usage"];
const RULES_KEYWORDS: &[&str] = &[
    "rule",
    "guideline",
    "standard",
    "convention",
    "requirement",
    "must",
    "should",
];
const CONTEXT_KEYWORDS: &[&str] = &[
    "context",
    "background",
    "overview",
    "about",
    "introduction",
];

/// Technology vocabulary scanned for tag inference. Order is priority order;
/// at most [`MAX_INFERRED_TAGS`] hits are kept.
const TAG_VOCABULARY: &[&str] = &[
    "typescript",
    "javascript",
    "python",
    "rust",
    "golang",
    "java",
    "react",
    "vue",
    "angular",
    "svelte",
    "nextjs",
    "node",
    "django",
    "flask",
    "spring",
    "docker",
    "kubernetes",
    "graphql",
    "sql",
    "database",
    "api",
    "testing",
    "security",
    "performance",
    "accessibility",
    "frontend",
    "backend",
    "devops",
];

pub const MAX_INFERRED_TAGS: usize = 5;

/// Infer the canonical kind of a `##` heading.
///
/// Keyword sets are tried in priority order against the title; when none
/// matches, a bounded lookahead over the following lines decides between
/// rules (a list marker appears first), examples (a sub-heading or fence
/// appears first), and the instructions fallback.
pub fn infer_section_kind(title: &str, lookahead: &[&str]) -> SectionKind {
    let folded = title.to_lowercase();

    if EXAMPLES_KEYWORDS.iter().any(|k| folded.contains(k)) {
        return SectionKind::Examples;
    }
    if RULES_KEYWORDS.iter().any(|k| folded.contains(k)) {
        return SectionKind::Rules;
    }
    if CONTEXT_KEYWORDS.iter().any(|k| folded.contains(k)) {
        return SectionKind::Context;
    }

    for line in lookahead.iter().take(4) {
        let trimmed = line.trim_start();
        if is_list_marker(trimmed) || is_ordinal_marker(trimmed) {
            return SectionKind::Rules;
        }
        if trimmed.starts_with("###") || trimmed.starts_with("```") {
            return SectionKind::Examples;
        }
    }

    SectionKind::Instructions
}

/// Whether a (trimmed) line starts an unordered list item.
pub fn is_list_marker(line: &str) -> bool {
    line.starts_with("- ")
}

/// Whether a (trimmed) line starts an ordered list item.
pub fn is_ordinal_marker(line: &str) -> bool {
    ORDINAL_REGEX.is_match(line)
}

/// Strip the list or ordinal marker from a line known to carry one.
pub fn strip_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ") {
        return rest;
    }
    match ORDINAL_REGEX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Extract the first backtick-quoted span, if any.
pub fn extract_inline_code(text: &str) -> Option<String> {
    INLINE_CODE_REGEX
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Split an example heading into (description, good).
///
/// A leading ✅ / "preferred" / "do:" marks a "do" example, a leading
/// ❌ / "avoid" / "don't:" marks a "don't"; no marker defaults to "do".
/// A "Good:"/"Bad:" label following an emoji marker is part of the marker,
/// not of the description. Bare word markers ("Avoid global state") set
/// polarity but stay in the description; stripping them would mangle the
/// sentence.
pub fn example_polarity(heading: &str) -> (String, bool) {
    let text = heading.trim();
    let folded = text.to_lowercase();

    let (rest, good) = if let Some(rest) = text.strip_prefix("✅") {
        (strip_polarity_label(rest), true)
    } else if let Some(rest) = text.strip_prefix("❌") {
        (strip_polarity_label(rest), false)
    } else if folded.starts_with("do:") {
        (text["do:".len()..].trim().to_string(), true)
    } else if folded.starts_with("don't:") || folded.starts_with("dont:") {
        let offset = if folded.starts_with("don't:") { 6 } else { 5 };
        (text[offset..].trim().to_string(), false)
    } else if folded.starts_with("preferred") {
        (text.to_string(), true)
    } else if folded.starts_with("avoid") {
        (text.to_string(), false)
    } else {
        (text.to_string(), true)
    };

    (rest, good)
}

/// Drop an optional "Good:"/"Bad:" label after an emoji marker.
fn strip_polarity_label(rest: &str) -> String {
    let trimmed = rest.trim();
    let folded = trimmed.to_lowercase();
    for label in ["good:", "bad:", "good -", "bad -"] {
        if folded.starts_with(label) {
            return trimmed[label.len()..].trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Scan a document body for technology keywords.
///
/// Returns at most [`MAX_INFERRED_TAGS`] vocabulary hits, plus the
/// ecosystem marker keyword when the body mentions it. The caller unions
/// the result with manifest-supplied tags.
pub fn infer_tags(body: &str, ecosystem_marker: &str) -> Vec<String> {
    let folded = body.to_lowercase();
    let mut tags: Vec<String> = TAG_VOCABULARY
        .iter()
        .filter(|keyword| folded.contains(*keyword))
        .take(MAX_INFERRED_TAGS)
        .map(|keyword| keyword.to_string())
        .collect();

    if !ecosystem_marker.is_empty() && folded.contains(&ecosystem_marker.to_lowercase()) {
        tags.push(ecosystem_marker.to_lowercase());
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Examples", SectionKind::Examples)]
    #[case("Usage Patterns", SectionKind::Examples)]
    #[case("Code Samples", SectionKind::Examples)]
    #[case("Guidelines", SectionKind::Rules)]
    #[case("Naming Conventions", SectionKind::Rules)]
    #[case("What You Must Do", SectionKind::Rules)]
    #[case("Background", SectionKind::Context)]
    #[case("About This Project", SectionKind::Context)]
    #[case("Introduction", SectionKind::Context)]
    fn test_keyword_classification(#[case] title: &str, #[case] expected: SectionKind) {
        assert_eq!(infer_section_kind(title, &[]), expected);
    }

    #[test]
    fn test_keyword_priority_examples_beats_rules() {
        // Ambiguous on purpose: first-match-wins keeps this deterministic.
        assert_eq!(
            infer_section_kind("Examples of Rules", &[]),
            SectionKind::Examples
        );
    }

    #[test]
    fn test_lookahead_list_means_rules() {
        let lookahead = ["", "- never commit secrets", ""];
        assert_eq!(
            infer_section_kind("Security", &lookahead),
            SectionKind::Rules
        );
    }

    #[test]
    fn test_lookahead_fence_means_examples() {
        let lookahead = ["", "```ts", "const x = 1;"];
        assert_eq!(
            infer_section_kind("Security", &lookahead),
            SectionKind::Examples
        );
    }

    #[test]
    fn test_lookahead_is_bounded() {
        // Signal on the fifth line is out of range; falls back to instructions.
        let lookahead = ["a", "b", "c", "d", "- bullet"];
        assert_eq!(
            infer_section_kind("Workflow", &lookahead),
            SectionKind::Instructions
        );
    }

    #[test]
    fn test_default_is_instructions() {
        assert_eq!(
            infer_section_kind("Workflow", &["plain prose"]),
            SectionKind::Instructions
        );
    }

    #[rstest]
    #[case("✅ Good: use strict types", "use strict types", true)]
    #[case("❌ Bad: missing assertions", "missing assertions", false)]
    #[case("✅ validated input", "validated input", true)]
    #[case("Do: lint before pushing", "lint before pushing", true)]
    #[case("don't: disable the linter", "disable the linter", false)]
    #[case("Avoid global state", "Avoid global state", false)]
    #[case("Preferred error handling", "Preferred error handling", true)]
    #[case("Handling timeouts", "Handling timeouts", true)]
    fn test_example_polarity(#[case] heading: &str, #[case] desc: &str, #[case] good: bool) {
        assert_eq!(example_polarity(heading), (desc.to_string(), good));
    }

    #[test]
    fn test_marker_stripping() {
        assert_eq!(strip_marker("- Use strict types"), "Use strict types");
        assert_eq!(strip_marker("3. Use strict types"), "Use strict types");
        assert_eq!(strip_marker("12) Use strict types"), "Use strict types");
    }

    #[test]
    fn test_inline_code_extraction() {
        assert_eq!(
            extract_inline_code("Example: `const x: string = s;`"),
            Some("const x: string = s;".to_string())
        );
        assert_eq!(extract_inline_code("no code here"), None);
    }

    #[test]
    fn test_tag_inference_cap_and_marker() {
        let body = "typescript javascript python rust golang java react copilot";
        let tags = infer_tags(body, "copilot");
        assert_eq!(tags.len(), MAX_INFERRED_TAGS + 1);
        assert!(tags.contains(&"typescript".to_string()));
        assert!(tags.contains(&"copilot".to_string()));
        // react is the sixth vocabulary hit; capped out
        assert!(!tags.contains(&"react".to_string()));
    }

    #[test]
    fn test_tag_inference_no_hits() {
        assert!(infer_tags("nothing relevant here", "copilot").is_empty());
    }
}
