//! YAML front matter handling
//!
//! Native rule files open with an optional block delimited by `---` lines.
//! Parsing is lenient: a malformed block degrades to "no front matter" with
//! a notice, never an error, because a human-authored file must always
//! parse into something.
//!
//! PRPM-internal fields that the target editor's own tooling does not
//! recognize travel as comment lines inside the same block
//! (`# prpm:title: My Rules`), invisible to the editor's YAML reader but
//! recoverable on the way back in.

use std::collections::BTreeMap;

const DELIMITER: &str = "---";
const EXTENSION_PREFIX: &str = "# prpm:";

/// A parsed front-matter block.
#[derive(Debug, Default)]
pub struct FrontMatter {
    /// The editor-recognized YAML mapping, if the block parsed.
    pub mapping: Option<serde_yaml::Mapping>,
    /// Recovered `# prpm:` extension fields, in key order.
    pub extensions: BTreeMap<String, String>,
    /// Set when a block was present but its YAML did not parse.
    pub malformed: bool,
}

impl FrontMatter {
    /// Fetch a string field from the mapping.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.mapping.as_ref()?.get(key)?.as_str()
    }

    /// Fetch a bool field from the mapping.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.mapping.as_ref()?.get(key)?.as_bool()
    }

    /// Fetch a string-sequence field from the mapping.
    pub fn get_str_seq(&self, key: &str) -> Option<Vec<String>> {
        let seq = self.mapping.as_ref()?.get(key)?.as_sequence()?;
        Some(
            seq.iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
        )
    }
}

/// Split a document into its raw front-matter block (without delimiters)
/// and the body. A lone opening delimiter with no close means the whole
/// document is body.
pub fn split(source: &str) -> (Option<&str>, &str) {
    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, source);
    };
    if first.trim_end() != DELIMITER {
        return (None, source);
    }

    let mut offset = first.len();
    for line in lines {
        if line.trim_end() == DELIMITER {
            let block = &source[first.len()..offset];
            let body = &source[offset + line.len()..];
            return (Some(block), body);
        }
        offset += line.len();
    }

    (None, source)
}

/// Parse a raw block into mapping + extension fields. Never fails.
pub fn parse(block: &str) -> FrontMatter {
    let mut yaml_lines: Vec<&str> = Vec::new();
    let mut extensions = BTreeMap::new();

    for line in block.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(EXTENSION_PREFIX) {
            if let Some((key, value)) = rest.split_once(':') {
                extensions.insert(key.trim().to_string(), value.trim().to_string());
            }
            continue;
        }
        if trimmed.starts_with('#') {
            continue;
        }
        yaml_lines.push(line);
    }

    let yaml = yaml_lines.join("\n");
    if yaml.trim().is_empty() {
        return FrontMatter {
            mapping: None,
            extensions,
            malformed: false,
        };
    }

    match serde_yaml::from_str::<serde_yaml::Mapping>(&yaml) {
        Ok(mapping) => FrontMatter {
            mapping: Some(mapping),
            extensions,
            malformed: false,
        },
        Err(_) => FrontMatter {
            mapping: None,
            extensions,
            malformed: true,
        },
    }
}

/// Split and parse in one step: (front matter if present, body).
pub fn extract(source: &str) -> (Option<FrontMatter>, &str) {
    match split(source) {
        (Some(block), body) => (Some(parse(block)), body),
        (None, body) => (None, body),
    }
}

/// Emit a front-matter block: the mapping's fields in insertion order,
/// then extension comments, wrapped in delimiters. Deterministic for a
/// given input.
pub fn emit(mapping: &serde_yaml::Mapping, extensions: &[(String, String)]) -> String {
    let mut block = String::from("---\n");

    if !mapping.is_empty() {
        let yaml = serde_yaml::to_string(mapping).unwrap_or_default();
        block.push_str(yaml.strip_prefix("---\n").unwrap_or(&yaml));
        if !block.ends_with('\n') {
            block.push('\n');
        }
    }

    for (key, value) in extensions {
        block.push_str(EXTENSION_PREFIX);
        block.push_str(key);
        block.push_str(": ");
        block.push_str(value);
        block.push('\n');
    }

    block.push_str("---\n");
    block
}
