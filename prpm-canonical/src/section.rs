//! Section sum type
//!
//! A canonical document is an ordered sequence of sections. The set of
//! section kinds is closed: converters match exhaustively, so adding a
//! variant forces every converter site to decide "render" or "skip with
//! warning" at compile time.

use serde::{Deserialize, Serialize};

/// Priority of an instructions section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
}

/// When a converted document should be active in the target editor.
///
/// Target-ecosystem concept; carried here because converter configuration
/// is part of the conversion contract, not of any one converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InclusionMode {
    #[serde(rename = "always")]
    Always,
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "fileMatch")]
    FileMatch,
}

impl InclusionMode {
    /// The native front-matter spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            InclusionMode::Always => "always",
            InclusionMode::Manual => "manual",
            InclusionMode::FileMatch => "fileMatch",
        }
    }
}

/// One enumerated directive inside a rules section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl Rule {
    pub fn new(content: impl Into<String>) -> Self {
        Rule {
            content: content.into(),
            rationale: None,
            examples: Vec::new(),
        }
    }
}

/// A do/don't code sample. `good: None` means "do".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub description: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good: Option<bool>,
}

impl Example {
    /// Whether this sample is a "do" example. Absence of polarity means "do".
    pub fn is_good(&self) -> bool {
        self.good.unwrap_or(true)
    }
}

/// A typed block of the canonical document.
///
/// Order within a document is reading order and is semantically meaningful:
/// converters may omit a section they cannot express, never relocate one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Section {
    /// Document header/identity.
    #[serde(rename_all = "camelCase")]
    Metadata {
        title: String,
        description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    /// Freeform behavioral guidance.
    #[serde(rename_all = "camelCase")]
    Instructions {
        title: String,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        priority: Option<Priority>,
    },
    /// Enumerated directives. `items` is non-empty by construction; a parser
    /// that would emit an empty rules section emits instructions instead.
    #[serde(rename_all = "camelCase")]
    Rules {
        title: String,
        items: Vec<Rule>,
        ordered: bool,
    },
    /// Do/don't code samples.
    #[serde(rename_all = "camelCase")]
    Examples { title: String, items: Vec<Example> },
    /// Assistant voice/character.
    #[serde(rename_all = "camelCase")]
    Persona {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        role: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        style: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        expertise: Vec<String>,
    },
    /// Background/project information.
    #[serde(rename_all = "camelCase")]
    Context { title: String, content: String },
    /// Declared external capabilities. Not universally representable.
    #[serde(rename_all = "camelCase")]
    Tools { items: Vec<String> },
    /// Escape hatch for content tied to one ecosystem.
    #[serde(rename_all = "camelCase")]
    Custom {
        #[serde(skip_serializing_if = "Option::is_none")]
        owning_ecosystem: Option<String>,
        content: String,
    },
}

impl Section {
    /// The wire name of this section kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Metadata { .. } => "metadata",
            Section::Instructions { .. } => "instructions",
            Section::Rules { .. } => "rules",
            Section::Examples { .. } => "examples",
            Section::Persona { .. } => "persona",
            Section::Context { .. } => "context",
            Section::Tools { .. } => "tools",
            Section::Custom { .. } => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_kind_names() {
        let section = Section::Context {
            title: "Background".to_string(),
            content: "A web service.".to_string(),
        };
        assert_eq!(section.kind(), "context");

        let section = Section::Tools {
            items: vec!["bash".to_string()],
        };
        assert_eq!(section.kind(), "tools");
    }

    #[test]
    fn test_section_serde_tagging() {
        let section = Section::Rules {
            title: "Guidelines".to_string(),
            items: vec![Rule::new("Use strict types")],
            ordered: false,
        };

        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "rules");
        assert_eq!(json["items"][0]["content"], "Use strict types");
        // Absent rationale must not serialize as null
        assert!(json["items"][0].get("rationale").is_none());

        let back: Section = serde_json::from_value(json).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn test_custom_owning_ecosystem_key() {
        let section = Section::Custom {
            owning_ecosystem: Some("cursor".to_string()),
            content: "raw".to_string(),
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["owningEcosystem"], "cursor");
    }

    #[test]
    fn test_inclusion_mode_spelling() {
        assert_eq!(InclusionMode::FileMatch.as_str(), "fileMatch");
        let parsed: InclusionMode = serde_json::from_str("\"fileMatch\"").unwrap();
        assert_eq!(parsed, InclusionMode::FileMatch);
    }

    #[test]
    fn test_example_polarity_default() {
        let example = Example {
            description: "plain".to_string(),
            code: "let x = 1;".to_string(),
            language: None,
            good: None,
        };
        assert!(example.is_good());
    }
}
