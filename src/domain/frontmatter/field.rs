//! List-valued frontmatter fields in inline (`key: [a, b]`) or bulleted form.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// `key: [a, b, c]` on a single line.
fn inline_field_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^(\w[\w-]*):[ \t]*\[([^\]\r\n]*)\]").unwrap())
}

/// `key:` with nothing after it, opening a bulleted list.
fn list_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^(\w[\w-]*):[ \t]*\r?$").unwrap())
}

/// A line that starts a new top-level field.
fn field_start_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\w[\w-]*:").unwrap())
}

fn bullet_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*[-*]\s*(.*)$").unwrap())
}

const QUOTES: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

fn strip_quotes(label: &str) -> &str {
    label.trim_matches(QUOTES).trim()
}

/// Notation of a list-valued field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Inline,
    List,
}

/// A list field as found in a metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListField<'a> {
    /// `key: [raw]`; `span` covers the whole match from `key` to `]`.
    Inline { span: Range<usize>, raw: &'a str },
    /// `key:` followed by candidate item lines. `span` runs from the header
    /// to the end of the last candidate; `followed` is set when another field
    /// comes after the list.
    List {
        span: Range<usize>,
        lines: Vec<&'a str>,
        followed: bool,
    },
    Absent,
}

impl<'a> ListField<'a> {
    /// Detect `key` in `block`, trying inline notation before list notation.
    pub fn detect(block: &'a str, key: &str) -> Self {
        if let Some(captures) = inline_field_regex()
            .captures_iter(block)
            .find(|captures| &captures[1] == key)
        {
            let whole = captures.get(0).map_or(0..0, |m| m.range());
            let raw = captures.get(2).map_or("", |m| m.as_str());
            return ListField::Inline { span: whole, raw };
        }

        if let Some(header) = list_header_regex()
            .captures_iter(block)
            .find(|captures| &captures[1] == key)
            .and_then(|captures| captures.get(0))
        {
            return Self::scan_list(block, header.start(), header.end());
        }

        ListField::Absent
    }

    fn scan_list(block: &'a str, header_start: usize, header_end: usize) -> Self {
        // The span stops before a trailing `\r` so CRLF and LF blocks render alike.
        let without_cr = |end: usize| {
            if end > header_start && block.as_bytes()[end - 1] == b'\r' {
                end - 1
            } else {
                end
            }
        };

        let mut lines = Vec::new();
        let mut span_end = without_cr(header_end);
        let mut followed = false;
        let mut cursor = header_end;

        // `cursor` sits on the line break that ends the previous line.
        while cursor < block.len() {
            let line_start = cursor + 1;
            let line_end = block[line_start..]
                .find('\n')
                .map_or(block.len(), |i| line_start + i);
            let line = &block[line_start..line_end];

            if field_start_regex().is_match(line) {
                followed = true;
                break;
            }

            lines.push(line);
            span_end = without_cr(line_end);
            cursor = line_end;
        }

        ListField::List {
            span: header_start..span_end,
            lines,
            followed,
        }
    }

    pub fn notation(&self) -> Option<Notation> {
        match self {
            ListField::Inline { .. } => Some(Notation::Inline),
            ListField::List { .. } => Some(Notation::List),
            ListField::Absent => None,
        }
    }

    /// Clean labels in their original order.
    pub fn labels(&self) -> Vec<String> {
        match self {
            ListField::Inline { raw, .. } => raw
                .split(',')
                .map(|piece| strip_quotes(piece.trim()))
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect(),
            ListField::List { lines, .. } => lines
                .iter()
                .filter_map(|line| bullet_regex().captures(line))
                .map(|captures| captures[1].trim().to_string())
                .filter(|label| !label.is_empty())
                .collect(),
            ListField::Absent => Vec::new(),
        }
    }
}

/// `key: [a, b]`
pub fn render_inline(key: &str, labels: &[String]) -> String {
    format!("{}: [{}]", key, labels.join(", "))
}

/// `key:` plus one `- label` line per label, separated by `line_ending`. A
/// blank line separates the list from a following field.
pub fn render_list(key: &str, labels: &[String], followed: bool, line_ending: &str) -> String {
    let mut output = format!("{}:", key);
    for label in labels {
        output.push_str(line_ending);
        output.push_str("- ");
        output.push_str(label);
    }
    if followed {
        output.push_str(line_ending);
    }
    output
}
