//! Read-only view of the fields the post index cares about.

use super::block::Frontmatter;
use super::field::ListField;
use regex::Regex;
use std::sync::OnceLock;

fn scalar_field_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^(\w[\w-]*):[ \t]*(.*?)[ \t]*\r?$").unwrap())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// First non-empty value of a single-line `key: value` field.
pub fn scalar_field(block: &str, key: &str) -> Option<String> {
    scalar_field_regex()
        .captures_iter(block)
        .filter(|captures| &captures[1] == key)
        .map(|captures| unquote(&captures[2]).to_string())
        .find(|value| !value.is_empty())
}

/// Fields extracted from a post's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMetadata {
    pub title: Option<String>,
    pub date: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl PostMetadata {
    pub fn from_block(block: &str) -> Self {
        PostMetadata {
            title: scalar_field(block, "title"),
            date: scalar_field(block, "date"),
            categories: ListField::detect(block, "categories").labels(),
            tags: ListField::detect(block, "tags").labels(),
            image: scalar_field(block, "image"),
        }
    }

    /// Metadata and body of a document. Documents without a block get empty
    /// metadata and the whole text as body.
    pub fn parse(document: &str) -> (Self, &str) {
        match Frontmatter::locate(document) {
            Ok(frontmatter) => (Self::from_block(frontmatter.inner()), frontmatter.body()),
            Err(_) => (Self::default(), document),
        }
    }
}
