//! Line scanner shared by the markdown-based parsers
//!
//! Turns heading-structured markdown into canonical sections with a single
//! forward pass. The scanner has three effective states (normal, inside a
//! fenced code block, accumulating an example's code block) and the state
//! is an explicit value threaded through the line loop, so a section
//! boundary cannot leave stale accumulator state behind.
//!
//! Malformed input never fails: an unclosed fence is flushed at end of
//! input, stray lines before the first heading are dropped, and a section
//! that was classified as rules but produced no items degrades to an
//! instructions section rather than violating the non-empty-rules
//! invariant.

use crate::heuristics::{
    example_polarity, extract_inline_code, infer_section_kind, is_list_marker, is_ordinal_marker,
    strip_marker, SectionKind,
};
use prpm_canonical::{Example, Rule, Section};

/// Title of the implicit section opened by a top-level heading.
pub const OVERVIEW_TITLE: &str = "Project Overview";

/// Scan a document body (front matter already removed) into sections.
pub fn scan_sections(body: &str) -> Vec<Section> {
    let lines: Vec<&str> = body.lines().collect();
    let mut scanner = Scanner::new();

    for (index, line) in lines.iter().enumerate() {
        if scanner.in_code {
            scanner.code_line(line);
        } else {
            scanner.normal_line(line, &lines[(index + 1).min(lines.len())..]);
        }
    }

    scanner.finish()
}

/// Derive a package description from the first paragraph after the
/// top-level heading: non-blank lines concatenated, stopping at the next
/// heading, truncated to 200 characters.
pub fn derive_description(body: &str) -> Option<String> {
    let mut lines = body.lines().skip_while(|l| !is_heading(l, 1));
    lines.next()?;

    let mut collected: Vec<&str> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            break;
        }
        if trimmed.is_empty() {
            if collected.is_empty() {
                continue;
            }
            break;
        }
        collected.push(trimmed);
    }

    if collected.is_empty() {
        return None;
    }
    let description = collected.join(" ");
    if description.chars().count() > 200 {
        return Some(description.chars().take(200).collect());
    }
    Some(description)
}

fn is_heading(line: &str, level: usize) -> bool {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    hashes == level && line[hashes..].starts_with(' ')
}

fn heading_text(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

/// A code sample waiting for its fenced block.
struct PendingExample {
    description: String,
    good: bool,
    explicit: bool,
}

/// Section under construction.
enum Builder {
    Context {
        title: String,
        lines: Vec<String>,
    },
    Instructions {
        title: String,
        lines: Vec<String>,
    },
    Rules {
        title: String,
        items: Vec<Rule>,
        ordered: bool,
        intro: Vec<String>,
    },
    Examples {
        title: String,
        items: Vec<Example>,
        pending: Option<PendingExample>,
    },
}

impl Builder {
    fn for_kind(kind: SectionKind, title: &str) -> Builder {
        match kind {
            SectionKind::Rules => Builder::Rules {
                title: title.to_string(),
                items: Vec::new(),
                ordered: false,
                intro: Vec::new(),
            },
            SectionKind::Examples => Builder::Examples {
                title: title.to_string(),
                items: Vec::new(),
                pending: None,
            },
            SectionKind::Context => Builder::Context {
                title: title.to_string(),
                lines: Vec::new(),
            },
            SectionKind::Instructions => Builder::Instructions {
                title: title.to_string(),
                lines: Vec::new(),
            },
        }
    }

    /// Finalize into a section, or nothing when no content accumulated.
    fn emit(self) -> Option<Section> {
        match self {
            Builder::Context { title, lines } => {
                let content = join_content(lines);
                if content.is_empty() {
                    None
                } else {
                    Some(Section::Context { title, content })
                }
            }
            Builder::Instructions { title, lines } => {
                let content = join_content(lines);
                if content.is_empty() {
                    None
                } else {
                    Some(Section::Instructions {
                        title,
                        content,
                        priority: None,
                    })
                }
            }
            Builder::Rules {
                title,
                items,
                ordered,
                intro,
            } => {
                if items.is_empty() {
                    // Never emit an empty rules section; the prose that was
                    // collected still belongs to the document.
                    let content = join_content(intro);
                    if content.is_empty() {
                        return None;
                    }
                    return Some(Section::Instructions {
                        title,
                        content,
                        priority: None,
                    });
                }
                Some(Section::Rules {
                    title,
                    items,
                    ordered,
                })
            }
            Builder::Examples { title, items, .. } => {
                if items.is_empty() {
                    None
                } else {
                    Some(Section::Examples { title, items })
                }
            }
        }
    }
}

fn join_content(lines: Vec<String>) -> String {
    let joined = lines.join("\n");
    joined.trim().to_string()
}

struct Scanner {
    sections: Vec<Section>,
    current: Option<Builder>,
    in_code: bool,
    code_language: Option<String>,
    code_lines: Vec<String>,
}

impl Scanner {
    fn new() -> Scanner {
        Scanner {
            sections: Vec::new(),
            current: None,
            in_code: false,
            code_language: None,
            code_lines: Vec::new(),
        }
    }

    fn close_current(&mut self) {
        if let Some(builder) = self.current.take() {
            if let Some(section) = builder.emit() {
                self.sections.push(section);
            }
        }
    }

    fn normal_line(&mut self, line: &str, rest: &[&str]) {
        if let Some(language) = fence_marker(line) {
            self.in_code = true;
            self.code_language = language;
            self.code_lines.clear();
            return;
        }

        if is_heading(line, 1) {
            self.close_current();
            self.current = Some(Builder::Context {
                title: OVERVIEW_TITLE.to_string(),
                lines: vec![heading_text(line).to_string()],
            });
            return;
        }

        if is_heading(line, 2) {
            self.close_current();
            let title = heading_text(line);
            let lookahead: Vec<&str> = rest.iter().take(4).copied().collect();
            let kind = infer_section_kind(title, &lookahead);
            self.current = Some(Builder::for_kind(kind, title));
            return;
        }

        if line.starts_with("###") {
            if let Some(Builder::Examples { pending, .. }) = self.current.as_mut() {
                let (description, good) = example_polarity(heading_text(line));
                *pending = Some(PendingExample {
                    description,
                    good,
                    explicit: polarity_is_explicit(heading_text(line)),
                });
                return;
            }
            // A sub-heading outside an examples section is plain content.
        }

        match self.current.as_mut() {
            Some(Builder::Rules {
                items,
                ordered,
                intro,
                ..
            }) => {
                let trimmed = line.trim_start();
                let indent = line.len() - trimmed.len();
                if indent >= 2 && is_list_marker(trimmed) {
                    attach_sub_bullet(items, strip_marker(trimmed));
                } else if indent < 2 && (is_list_marker(trimmed) || is_ordinal_marker(trimmed)) {
                    if items.is_empty() && is_ordinal_marker(trimmed) {
                        *ordered = true;
                    }
                    items.push(Rule::new(strip_marker(trimmed)));
                } else if !trimmed.is_empty() {
                    // Soft-wrapped continuation of the latest rule, or intro
                    // prose before the first bullet.
                    match items.last_mut() {
                        Some(rule) => {
                            rule.content.push(' ');
                            rule.content.push_str(trimmed);
                        }
                        None => intro.push(trimmed.to_string()),
                    }
                }
            }
            Some(Builder::Context { lines, .. }) | Some(Builder::Instructions { lines, .. }) => {
                if line.trim().is_empty() {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                } else {
                    lines.push(line.trim_end().to_string());
                }
            }
            Some(Builder::Examples { .. }) => {
                // Prose between an example heading and its fence carries no
                // modeled meaning; the description comes from the heading.
            }
            None => {
                // Body text before the first heading is dropped.
            }
        }
    }

    fn code_line(&mut self, line: &str) {
        if fence_marker(line).is_some() {
            self.flush_code();
            return;
        }
        self.code_lines.push(line.to_string());
    }

    /// Close the open fence: attach to the pending example inside an
    /// examples section, otherwise re-fence into the active free text.
    fn flush_code(&mut self) {
        let code = self.code_lines.join("\n");
        let language = self.code_language.take();
        self.code_lines.clear();
        self.in_code = false;

        match self.current.as_mut() {
            Some(Builder::Examples { items, pending, .. }) => {
                let pending = pending.take().unwrap_or(PendingExample {
                    description: String::new(),
                    good: true,
                    explicit: false,
                });
                items.push(Example {
                    description: pending.description,
                    code,
                    language,
                    good: if pending.explicit {
                        Some(pending.good)
                    } else if pending.good {
                        None
                    } else {
                        Some(false)
                    },
                });
            }
            Some(Builder::Context { lines, .. }) | Some(Builder::Instructions { lines, .. }) => {
                lines.push(format!("```{}", language.unwrap_or_default()));
                lines.extend(code.lines().map(|l| l.to_string()));
                lines.push("```".to_string());
            }
            Some(Builder::Rules { intro, items, .. }) => {
                // Rules have no free-text field. A block following a rule is
                // that rule's example; earlier blocks ride with the intro
                // prose so they survive the no-items downgrade.
                match items.last_mut() {
                    Some(rule) => rule.examples.push(code),
                    None => {
                        intro.push(format!("```{}", language.unwrap_or_default()));
                        intro.extend(code.lines().map(|l| l.to_string()));
                        intro.push("```".to_string());
                    }
                }
            }
            None => {}
        }
    }

    fn finish(mut self) -> Vec<Section> {
        if self.in_code {
            // Unclosed fence: flush what accumulated.
            self.flush_code();
        }
        self.close_current();
        self.sections
    }
}

/// Returns Some(language) when the line opens or closes a fence.
fn fence_marker(line: &str) -> Option<Option<String>> {
    let trimmed = line.trim_end();
    let rest = trimmed.strip_prefix("```")?;
    let language = rest.trim();
    if language.is_empty() {
        Some(None)
    } else {
        Some(Some(language.to_string()))
    }
}

/// Whether an example heading carries an explicit polarity marker.
fn polarity_is_explicit(heading: &str) -> bool {
    let folded = heading.trim().to_lowercase();
    heading.trim_start().starts_with('✅')
        || heading.trim_start().starts_with('❌')
        || folded.starts_with("do:")
        || folded.starts_with("don't:")
        || folded.starts_with("dont:")
        || folded.starts_with("preferred")
        || folded.starts_with("avoid")
}

/// Attach a sub-bullet to the most recently added rule.
fn attach_sub_bullet(items: &mut [Rule], text: &str) {
    let Some(rule) = items.last_mut() else {
        return;
    };
    let folded = text.to_lowercase();
    if let Some(rest) = prefix_rest(text, &folded, "rationale:") {
        rule.rationale = Some(rest.to_string());
    } else if let Some(rest) = prefix_rest(text, &folded, "why:") {
        rule.rationale = Some(rest.to_string());
    } else if let Some(rest) = prefix_rest(text, &folded, "example:") {
        let example = extract_inline_code(rest).unwrap_or_else(|| rest.to_string());
        rule.examples.push(example);
    } else {
        // Unprefixed sub-bullets extend the rule body.
        rule.content.push(' ');
        rule.content.push_str(text);
    }
}

fn prefix_rest<'a>(text: &'a str, folded: &str, prefix: &str) -> Option<&'a str> {
    if folded.starts_with(prefix) {
        Some(text[prefix.len()..].trim())
    } else {
        None
    }
}
