//! Assessment text → structured markup.
//!
//! | Line shape | Block |
//! |------------|-------|
//! | `1. **Summary:** rest` | [`AssessmentBlock::Heading`] (+ paragraph for `rest`) |
//! | `**Whole line bold**` | [`AssessmentBlock::Subheading`] |
//! | `* item` / `- item` | [`AssessmentBlock::Bullets`] (consecutive items grouped) |
//! | anything else | [`AssessmentBlock::Paragraph`] |

use std::sync::LazyLock;

use maud::{Markup, html};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Where the useful part of a response starts
pub const SUMMARY_START: &str = "1. **Summary:**";
/// Boilerplate models like to append; everything from here on is dropped
pub const DISCLAIMER_START: &str = "**Important Disclaimer:**";

static NUMBERED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s+\*\*(.+?)\*\*\s*(.*)$").expect("heading pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum AssessmentBlock {
    Heading(String),
    Subheading(String),
    Bullets(Vec<String>),
    Paragraph(String),
}

/// A parsed assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDocument {
    pub blocks: Vec<AssessmentBlock>,
}

/// Cut a raw response down to the span between [`SUMMARY_START`] and
/// [`DISCLAIMER_START`]. Either bound is optional.
pub fn trim_assessment(text: &str) -> &str {
    let start = text.find(SUMMARY_START).unwrap_or(0);
    let rest = &text[start..];
    let end = rest.find(DISCLAIMER_START).unwrap_or(rest.len());
    rest[..end].trim()
}

impl AssessmentDocument {
    /// Parse a raw model response (trimmed with [`trim_assessment`] first)
    pub fn parse(text: &str) -> Self {
        let mut blocks = Vec::new();
        let mut bullets: Vec<String> = Vec::new();

        for line in trim_assessment(text).lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(item) = bullet_item(line) {
                bullets.push(item.to_string());
                continue;
            }
            if !bullets.is_empty() {
                blocks.push(AssessmentBlock::Bullets(std::mem::take(&mut bullets)));
            }

            if let Some(caps) = NUMBERED_HEADING.captures(line) {
                let heading = caps[1].trim().trim_end_matches(':').trim();
                blocks.push(AssessmentBlock::Heading(heading.to_string()));
                let rest = caps[2].trim();
                if !rest.is_empty() {
                    blocks.push(AssessmentBlock::Paragraph(rest.to_string()));
                }
            } else if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
                blocks.push(AssessmentBlock::Subheading(line.replace("**", "").trim().to_string()));
            } else {
                blocks.push(AssessmentBlock::Paragraph(line.to_string()));
            }
        }
        if !bullets.is_empty() {
            blocks.push(AssessmentBlock::Bullets(bullets));
        }

        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render as HTML markup. Text is escaped by `maud`; inline `**bold**`
    /// becomes `<strong>`.
    pub fn to_markup(&self) -> Markup {
        html! {
            div.assessment {
                @for block in &self.blocks {
                    @match block {
                        AssessmentBlock::Heading(text) => { h2 { (inline(text)) } }
                        AssessmentBlock::Subheading(text) => { h3 { (inline(text)) } }
                        AssessmentBlock::Bullets(items) => {
                            ul {
                                @for item in items {
                                    li { (inline(item)) }
                                }
                            }
                        }
                        AssessmentBlock::Paragraph(text) => { p { (inline(text)) } }
                    }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.to_markup().into_string()
    }
}

/// Drop markdown emphasis markers for plain-text display
pub fn plain_text(text: &str) -> String {
    text.replace("**", "")
}

/// A bullet line's content. A line opening with `**` is never a bullet.
fn bullet_item(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("- ") {
        return Some(rest.trim());
    }
    if line.starts_with('*') && !line.starts_with("**") {
        return Some(line.trim_start_matches('*').trim());
    }
    None
}

/// Inline text with `**bold**` spans. An unmatched marker is kept as text.
fn inline(text: &str) -> Markup {
    let parts: Vec<&str> = text.split("**").collect();
    let last = parts.len() - 1;
    html! {
        @for (i, part) in parts.iter().enumerate() {
            @if i % 2 == 0 {
                (part)
            } @else if i < last {
                strong { (part) }
            } @else {
                "**" (part)
            }
        }
    }
}
