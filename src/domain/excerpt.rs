//! Post excerpts for the index

use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use regex::Regex;
use std::sync::OnceLock;

const FALLBACK_CHARS: usize = 150;

fn heading_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^#+\s+.*$").unwrap())
}

/// Plain text of the first paragraph in `body`, skipping headings.
///
/// Bodies without a paragraph fall back to their first 150 characters,
/// heading lines removed, followed by `...`.
pub fn excerpt(body: &str) -> String {
    let mut in_paragraph = false;
    let mut text = String::new();

    for event in MdParser::new(body) {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
                in_paragraph = false;
            }
            Event::Text(chunk) | Event::Code(chunk) if in_paragraph => {
                text.push_str(&chunk);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                text.push(' ');
            }
            _ => {}
        }
    }

    let without_headings = heading_line_regex().replace_all(body, "");
    let trimmed = without_headings.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let head: String = trimmed.chars().take(FALLBACK_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_headings() {
        let body = "\n# My Post\n\nFirst paragraph\nwraps here.\n\nSecond paragraph.\n";
        assert_eq!(excerpt(body), "First paragraph wraps here.");
    }

    #[test]
    fn strips_inline_markup() {
        let body = "Some **bold** text with `code` and a [link](https://example.com).";
        assert_eq!(excerpt(body), "Some bold text with code and a link.");
    }

    #[test]
    fn heading_only_body_has_no_excerpt() {
        assert_eq!(excerpt("# Only a heading"), "");
        assert_eq!(excerpt("\n# Title\n\n## Section\n"), "");
    }

    #[test]
    fn fallback_skips_heading_lines() {
        let body = "# Title\n\n```\nlet x = 1;\n```\n";
        assert_eq!(excerpt(body), "```\nlet x = 1;\n```...");
    }

    #[test]
    fn fallback_is_truncated() {
        let body = format!("```\n{}\n```", "x".repeat(400));
        let result = excerpt(&body);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), FALLBACK_CHARS + 3);
    }

    #[test]
    fn empty_body_has_no_excerpt() {
        assert_eq!(excerpt("  \n\n"), "");
    }
}
