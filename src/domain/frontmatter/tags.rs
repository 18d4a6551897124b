//! Merging tags into a document's frontmatter.

use super::block::Frontmatter;
use super::field::{render_inline, render_list, ListField, Notation};
use crate::error::Result;
use std::collections::HashSet;

const TAGS_KEY: &str = "tags";

/// How the tags field was written after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagNotation {
    /// Existing `tags: [..]` line rewritten in place.
    Inline,
    /// Existing bulleted list rewritten in place.
    List,
    /// No tags field existed; an inline field was appended.
    Appended,
    /// No tags field existed and there was nothing to add.
    Untouched,
}

impl From<Notation> for TagNotation {
    fn from(notation: Notation) -> Self {
        match notation {
            Notation::Inline => TagNotation::Inline,
            Notation::List => TagNotation::List,
        }
    }
}

/// Result of merging tags into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUpdate {
    pub content: String,
    pub tags: Vec<String>,
    pub notation: TagNotation,
}

impl TagUpdate {
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Split a comma-separated tag argument, trimming pieces and dropping empty ones.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ordered-set union: existing tags first, then new ones not yet present.
pub fn merge_tags(existing: &[String], new: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + new.len());
    let mut merged = Vec::with_capacity(existing.len() + new.len());

    for tag in existing.iter().chain(new.iter()) {
        if !tag.is_empty() && seen.insert(tag.as_str()) {
            merged.push(tag.clone());
        }
    }

    merged
}

/// Merge `new_tags` into the document's `tags` field, keeping its notation.
///
/// Fails with [`crate::error::BlogError::NoFrontmatter`] when the document has
/// no metadata block.
pub fn add_tags(document: &str, new_tags: &[String]) -> Result<TagUpdate> {
    let frontmatter = Frontmatter::locate(document)?;
    let block = frontmatter.inner();
    let line_ending = frontmatter.line_ending();
    let field = ListField::detect(block, TAGS_KEY);

    let (updated_block, tags, notation) = match &field {
        ListField::Inline { span, .. } => {
            let tags = merge_tags(&field.labels(), new_tags);
            let rendered = render_inline(TAGS_KEY, &tags);
            (
                replace_range(block, span.clone(), &rendered),
                tags,
                TagNotation::Inline,
            )
        }
        ListField::List { span, followed, .. } => {
            let tags = merge_tags(&field.labels(), new_tags);
            let rendered = render_list(TAGS_KEY, &tags, *followed, line_ending);
            (
                replace_range(block, span.clone(), &rendered),
                tags,
                TagNotation::List,
            )
        }
        ListField::Absent => {
            let tags = merge_tags(&[], new_tags);
            if tags.is_empty() {
                (block.to_string(), tags, TagNotation::Untouched)
            } else {
                let rendered = render_inline(TAGS_KEY, &tags);
                let appended = if block.is_empty() {
                    rendered
                } else {
                    format!("{}{}{}", block, line_ending, rendered)
                };
                (appended, tags, TagNotation::Appended)
            }
        }
    };

    Ok(TagUpdate {
        content: frontmatter.splice(&updated_block),
        tags,
        notation,
    })
}

fn replace_range(text: &str, range: std::ops::Range<usize>, replacement: &str) -> String {
    let mut output = String::with_capacity(text.len() + replacement.len());
    output.push_str(&text[..range.start]);
    output.push_str(replacement);
    output.push_str(&text[range.end..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_tag_list_trims_and_drops_empty() {
        assert_eq!(parse_tag_list(" rust, cli ,,web "), tags(&["rust", "cli", "web"]));
        assert!(parse_tag_list(" , ").is_empty());
    }

    #[test]
    fn merge_preserves_order_and_removes_duplicates() {
        let merged = merge_tags(&tags(&["a", "b"]), &tags(&["b", "c"]));
        assert_eq!(merged, tags(&["a", "b", "c"]));
    }

    #[test]
    fn merge_is_case_sensitive() {
        let merged = merge_tags(&tags(&["Rust"]), &tags(&["rust"]));
        assert_eq!(merged, tags(&["Rust", "rust"]));
    }

    #[test]
    fn merge_deduplicates_within_each_side() {
        let merged = merge_tags(&tags(&["a", "a"]), &tags(&["c", "c", "a"]));
        assert_eq!(merged, tags(&["a", "c"]));
    }

    #[test]
    fn inline_tags_are_merged_in_place() {
        let doc = "---\ntitle: Post\ntags: [a, b]\ndate: May 01, 2025\n---\nBody\n";
        let update = add_tags(doc, &tags(&["b", "c"])).unwrap();

        assert_eq!(
            update.content,
            "---\ntitle: Post\ntags: [a, b, c]\ndate: May 01, 2025\n---\nBody\n"
        );
        assert_eq!(update.tags, tags(&["a", "b", "c"]));
        assert_eq!(update.notation, TagNotation::Inline);
    }

    #[test]
    fn quoted_inline_tags_match_bare_new_tags() {
        let doc = "---\ntags: [\"design\", 'ux']\n---\n";
        let update = add_tags(doc, &tags(&["design"])).unwrap();

        assert_eq!(update.content, "---\ntags: [design, ux]\n---\n");
        assert_eq!(update.tags, tags(&["design", "ux"]));
    }

    #[test]
    fn list_tags_stay_in_list_form() {
        let doc = "---\ntitle: Post\ntags:\n  - a\n  - b\ndate: May 01, 2025\n---\nBody\n";
        let update = add_tags(doc, &tags(&["c"])).unwrap();

        assert_eq!(
            update.content,
            "---\ntitle: Post\ntags:\n- a\n- b\n- c\n\ndate: May 01, 2025\n---\nBody\n"
        );
        assert_eq!(update.notation, TagNotation::List);
    }

    #[test]
    fn list_tags_at_end_of_block() {
        let doc = "---\ntitle: Post\ntags:\n- a\n---\nBody\n";
        let update = add_tags(doc, &tags(&["a", "b"])).unwrap();

        assert_eq!(update.content, "---\ntitle: Post\ntags:\n- a\n- b\n---\nBody\n");
    }

    #[test]
    fn missing_tags_field_is_appended_inline() {
        let doc = "---\ntitle: Post\ndate: May 01, 2025\n---\n\n# Post\n";
        let update = add_tags(doc, &tags(&["x", "y"])).unwrap();

        assert_eq!(
            update.content,
            "---\ntitle: Post\ndate: May 01, 2025\ntags: [x, y]\n---\n\n# Post\n"
        );
        assert_eq!(update.notation, TagNotation::Appended);
    }

    #[test]
    fn empty_block_gets_tags_field() {
        let update = add_tags("---\n---\nBody\n", &tags(&["x"])).unwrap();
        assert_eq!(update.content, "---\ntags: [x]\n---\nBody\n");
    }

    #[test]
    fn no_new_tags_is_idempotent_for_canonical_notation() {
        let inline = "---\ntitle: Post\ntags: [a, b]\n---\nBody\n";
        let list = "---\ntitle: Post\ntags:\n- a\n- b\n\ndate: May 01, 2025\n---\nBody\n";
        let list_last = "---\ntitle: Post\ntags:\n- a\n- b\n---\nBody\n";
        let absent = "---\ntitle: Post\n---\nBody\n";

        for doc in [inline, list, list_last, absent] {
            let update = add_tags(doc, &[]).unwrap();
            assert_eq!(update.content, doc);
            assert!(!update.changed(doc));
        }
        assert_eq!(
            add_tags(absent, &[]).unwrap().notation,
            TagNotation::Untouched
        );
    }

    #[test]
    fn repeated_merge_is_stable() {
        let doc = "---\ntags:\n  * a\ntitle: Post\n---\n";
        let once = add_tags(doc, &tags(&["b"])).unwrap().content;
        let twice = add_tags(&once, &tags(&["b"])).unwrap().content;

        assert_eq!(once, "---\ntags:\n- a\n- b\n\ntitle: Post\n---\n");
        assert_eq!(once, twice);
    }

    #[test]
    fn body_delimiters_are_left_alone() {
        let doc = "---\ntitle: Post\n---\nIntro\n\n---\n\ntags: [not, frontmatter]\n";
        let update = add_tags(doc, &tags(&["real"])).unwrap();

        assert_eq!(
            update.content,
            "---\ntitle: Post\ntags: [real]\n---\nIntro\n\n---\n\ntags: [not, frontmatter]\n"
        );
    }

    #[test]
    fn document_without_frontmatter_fails() {
        let result = add_tags("# Just a post\n\ntags: [a]\n", &tags(&["b"]));
        assert!(matches!(result, Err(BlogError::NoFrontmatter)));
    }

    #[test]
    fn crlf_list_tags_keep_crlf() {
        let doc = "---\r\ntitle: Post\r\ntags:\r\n- a\r\ndate: B\r\n---\r\nBody\r\n";
        let update = add_tags(doc, &tags(&["b"])).unwrap();

        assert_eq!(
            update.content,
            "---\r\ntitle: Post\r\ntags:\r\n- a\r\n- b\r\n\r\ndate: B\r\n---\r\nBody\r\n"
        );
        assert!(!update.content.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn crlf_missing_field_is_appended_with_crlf() {
        let doc = "---\r\ntitle: Post\r\n---\r\nBody\r\n";
        let update = add_tags(doc, &tags(&["x"])).unwrap();

        assert_eq!(
            update.content,
            "---\r\ntitle: Post\r\ntags: [x]\r\n---\r\nBody\r\n"
        );
        assert_eq!(
            add_tags("---\r\n---\r\n", &tags(&["x"])).unwrap().content,
            "---\r\ntags: [x]\r\n---\r\n"
        );
    }

    #[test]
    fn no_new_tags_is_idempotent_for_crlf_documents() {
        let list = "---\r\ntags:\r\n- a\r\n\r\ndate: B\r\n---\r\n";
        let list_last = "---\r\ntitle: Post\r\ntags:\r\n- a\r\n- b\r\n---\r\nBody\r\n";
        let inline = "---\r\ntags: [a, b]\r\ntitle: Post\r\n---\r\n";

        for doc in [list, list_last, inline] {
            let update = add_tags(doc, &[]).unwrap();
            assert_eq!(update.content, doc);
            assert!(!update.changed(doc));

            let again = add_tags(doc, &tags(&["a"])).unwrap();
            assert!(!again.changed(doc));
        }
    }
}
