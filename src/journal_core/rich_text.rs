//! HTML body rendering.
//!
//! Diarium stores entry bodies as HTML, Day One wants plain text plus a
//! serialized rich-text document. Only the visible text survives: block-level
//! elements become line breaks and inline markup (bold, italics, links) is
//! flattened into the surrounding text.

use crate::constants;
use ego_tree::NodeRef;
use scraper::{Html, Node};
use serde::Serialize;
use uuid::Uuid;

/// Elements whose boundaries start a new line.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th", "thead", "tr",
    "ul",
];

/// Elements whose content is never visible.
const HIDDEN_ELEMENTS: &[&str] = &["head", "noscript", "script", "style", "template", "title"];

#[derive(Debug, Serialize)]
struct RichTextDocument {
    contents: Vec<RichTextLine>,
    meta: RichTextMeta,
}

#[derive(Debug, Serialize)]
struct RichTextLine {
    attributes: LineAttributes,
    text: String,
}

#[derive(Debug, Serialize)]
struct LineAttributes {
    line: LineFormat,
}

#[derive(Debug, Serialize)]
struct LineFormat {
    header: u32,
    identifier: String,
}

#[derive(Debug, Serialize)]
struct RichTextMeta {
    created: CreatedBy,
    #[serde(rename = "small-lines-removed")]
    small_lines_removed: bool,
    version: u32,
}

#[derive(Debug, Serialize)]
struct CreatedBy {
    platform: String,
    version: u32,
}

/// Extracts the visible text of an HTML fragment.
///
/// Block-level boundaries and `<br>` become newlines and the result is trimmed.
///
/// # Examples
///
/// ```
/// use diarium2dayone::journal_core::rich_text::html_to_text;
///
/// assert_eq!(html_to_text("<p>Hello <b>world</b></p><p>Again</p>"), "Hello world\nAgain");
/// assert_eq!(html_to_text(""), "");
/// ```
pub fn html_to_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let mut text = String::new();
    collect_text(*fragment.root_element(), &mut text);
    text.trim().to_string()
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => push_text(out, text),
            Node::Element(element) => {
                let name = element.name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }

                let is_block = BLOCK_ELEMENTS.contains(&name);
                if is_block {
                    break_line(out);
                }
                collect_text(child, out);
                if is_block {
                    break_line(out);
                }
            }
            _ => {}
        }
    }
}

fn push_text(out: &mut String, text: &str) {
    // Formatting whitespace between blocks is not content.
    if at_line_start(out) && text.trim().is_empty() {
        return;
    }
    out.push_str(text);
}

fn break_line(out: &mut String) {
    if !at_line_start(out) {
        out.push('\n');
    }
}

fn at_line_start(out: &str) -> bool {
    out.is_empty() || out.ends_with('\n')
}

/// Renders an HTML body as a serialized Day One rich-text document.
///
/// The document holds a single line carrying the whole plain text under a fresh
/// identifier. An empty body yields an empty string rather than a document.
///
/// # Errors
///
/// Returns the serialization error from `serde_json`.
///
/// # Examples
///
/// ```
/// use diarium2dayone::journal_core::rich_text::html_to_rich_text;
///
/// assert_eq!(html_to_rich_text("").unwrap(), "");
///
/// let document: serde_json::Value =
///     serde_json::from_str(&html_to_rich_text("<p>Hi</p>").unwrap()).unwrap();
/// assert_eq!(document["contents"][0]["text"], "Hi");
/// assert_eq!(document["meta"]["version"], 1);
/// ```
pub fn html_to_rich_text(html: &str) -> Result<String, serde_json::Error> {
    if html.is_empty() {
        return Ok(String::new());
    }

    let document = RichTextDocument {
        contents: vec![RichTextLine {
            attributes: LineAttributes {
                line: LineFormat {
                    header: 0,
                    identifier: Uuid::new_v4().hyphenated().to_string().to_uppercase(),
                },
            },
            text: html_to_text(html),
        }],
        meta: RichTextMeta {
            created: CreatedBy {
                platform: constants::RICH_TEXT_PLATFORM.to_string(),
                version: constants::RICH_TEXT_PLATFORM_VERSION,
            },
            small_lines_removed: true,
            version: constants::RICH_TEXT_SCHEMA_VERSION,
        },
    };

    serde_json::to_string(&document)
}
