//! Format auto-sensing
//!
//! Best-effort classification of raw text into an ecosystem id, used by
//! callers that receive a file with no declared format. This is a
//! convenience classifier, not a validator: adversarial input can fool it,
//! and a wrong guess costs nothing worse than a poor parse.

use crate::frontmatter;

/// Guess which ecosystem's native format a document is written in.
///
/// Signals, in order: a canonical JSON envelope, a JSON system-message
/// document, front-matter keys specific to one editor, and finally bare
/// heading-structured markdown.
pub fn detect_format(source: &str) -> Option<&'static str> {
    let trimmed = source.trim_start();

    if trimmed.starts_with('{') {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(source) {
            if let Some(object) = value.as_object() {
                let is_canonical = object
                    .get("content")
                    .and_then(|c| c.get("format"))
                    .and_then(|f| f.as_str())
                    == Some("canonical");
                if is_canonical {
                    return Some("canonical");
                }
                if object.contains_key("systemMessage") || object.contains_key("system_message") {
                    return Some("continue");
                }
            }
        }
        return None;
    }

    if let (Some(block), _) = frontmatter::split(source) {
        if block.contains("alwaysApply:") || block.contains("globs:") {
            return Some("cursor");
        }
        if block.contains("inclusion:") {
            return Some("kiro");
        }
        // Front matter with unrecognized keys still reads as a rule file;
        // plain project instructions are the least specific markdown home.
        return Some("copilot");
    }

    if source.lines().any(|line| {
        let t = line.trim_start();
        t.starts_with("# ") || t.starts_with("## ")
    }) {
        return Some("copilot");
    }

    None
}
