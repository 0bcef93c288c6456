//! Cursor export tests (canonical → .mdc) and extension-field round trips

use prpm_babel::{ConvertOptions, FormatRegistry};
use prpm_canonical::{CanonicalPackage, Example, PackageMeta, Rule, Section};

fn registry() -> FormatRegistry {
    FormatRegistry::with_defaults()
}

fn package(sections: Vec<Section>) -> CanonicalPackage {
    let mut meta = PackageMeta::new("pkg-1", "My Rules");
    meta.version = "1.2.0".to_string();
    meta.description = Some("Strict TS rules.".to_string());
    meta.author = Some("ada".to_string());
    meta.tags = vec!["typescript".to_string()];
    CanonicalPackage::from_meta(&meta, "canonical", sections)
}

#[test]
fn test_tools_skip_scenario() {
    let mut pkg = package(vec![Section::Tools {
        items: vec!["bash".to_string(), "web-search".to_string()],
    }]);
    pkg.source_format = "claude".to_string();

    let out = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();

    assert!(!out.content.contains("bash"));
    assert!(!out.content.contains("web-search"));
    assert!(out
        .warnings
        .contains(&"Tools section skipped (claude-specific)".to_string()));
    assert!(out.lossy_conversion);
    assert!(out.quality_score < 100);
}

#[test]
fn test_unordered_rules_scenario() {
    let pkg = package(vec![Section::Rules {
        title: "Guidelines".to_string(),
        items: vec![
            Rule::new("First"),
            Rule::new("Second"),
            Rule::new("Third"),
            Rule::new("Fourth"),
            Rule::new("Fifth"),
        ],
        ordered: false,
    }]);

    let out = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();

    let bullets = out
        .content
        .lines()
        .filter(|l| l.starts_with("- "))
        .count();
    assert_eq!(bullets, 5);
    for line in out.content.lines() {
        let trimmed = line.trim_start();
        assert!(
            !(trimmed.starts_with(char::is_numeric) && trimmed.contains(". ")),
            "unexpected ordinal rendering: {line:?}"
        );
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let pkg = package(vec![
        Section::Metadata {
            title: "My Rules".to_string(),
            description: "Strict TS rules.".to_string(),
            icon: Some("📘".to_string()),
        },
        Section::Examples {
            title: "Examples".to_string(),
            items: vec![Example {
                description: "narrow types".to_string(),
                code: "let n: number = 1;".to_string(),
                language: Some("ts".to_string()),
                good: Some(true),
            }],
        },
    ]);

    let first = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();
    let second = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.quality_score, second.quality_score);
}

#[test]
fn test_section_order_is_preserved() {
    let pkg = package(vec![
        Section::Metadata {
            title: "Doc".to_string(),
            description: "d".to_string(),
            icon: None,
        },
        Section::Instructions {
            title: "Alpha".to_string(),
            content: "a".to_string(),
            priority: None,
        },
        Section::Tools {
            items: vec!["dropped".to_string()],
        },
        Section::Rules {
            title: "Beta".to_string(),
            items: vec![Rule::new("r")],
            ordered: false,
        },
        Section::Context {
            title: "Gamma".to_string(),
            content: "c".to_string(),
        },
    ]);

    let out = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();

    let alpha = out.content.find("## Alpha").expect("alpha rendered");
    let beta = out.content.find("## Beta").expect("beta rendered");
    let gamma = out.content.find("## Gamma").expect("gamma rendered");
    assert!(alpha < beta && beta < gamma);
    assert!(!out.content.contains("dropped"));
}

#[test]
fn test_extension_fields_round_trip() {
    let pkg = package(vec![Section::Context {
        title: "Background".to_string(),
        content: "A service.".to_string(),
    }]);

    let out = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();

    // Parse the emitted file back with a bare manifest; the comment fields
    // must restore what the manifest no longer knows.
    let bare = PackageMeta::new("pkg-1", "fallback");
    let back = registry().parse(&out.content, "cursor", &bare).unwrap();

    assert_eq!(back.version, "1.2.0");
    assert_eq!(back.author.as_deref(), Some("ada"));
    assert!(back.tags.contains("typescript"));
    match &back.sections()[0] {
        Section::Metadata { title, description, .. } => {
            assert_eq!(title, "My Rules");
            assert_eq!(description, "Strict TS rules.");
        }
        other => panic!("Expected metadata, got {}", other.kind()),
    }
}

#[test]
fn test_high_priority_instructions_render_marker() {
    let pkg = package(vec![Section::Instructions {
        title: "Safety".to_string(),
        content: "Never drop tables.".to_string(),
        priority: Some(prpm_canonical::Priority::High),
    }]);

    let out = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();
    assert!(out.content.contains("## Safety\n\n**Important:**\n\nNever drop tables."));
}

#[test]
fn test_persona_renders_role_block() {
    let pkg = package(vec![Section::Persona {
        name: Some("Ada".to_string()),
        role: "Senior reviewer".to_string(),
        icon: None,
        style: vec!["terse".to_string()],
        expertise: vec!["rust".to_string(), "apis".to_string()],
    }]);

    let out = registry()
        .convert(&pkg, "cursor", &ConvertOptions::default())
        .unwrap();
    assert!(out.content.contains("## Role"));
    assert!(out.content.contains("**Ada**: Senior reviewer"));
    assert!(out.content.contains("**Style:** terse"));
    assert!(out.content.contains("- apis"));
    assert_eq!(out.quality_score, 100);
}
