//! Locating the `---` delimited metadata block and splicing it back.

use crate::error::{BlogError, Result};
use std::ops::Range;

const DELIMITER: &str = "---";

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\n').trim_end_matches('\r') == DELIMITER
}

/// The metadata block at the top of a document.
///
/// `inner` covers the text strictly between the two delimiter lines, without
/// the line break that precedes the closing delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    document: &'a str,
    inner: Range<usize>,
    closing: Range<usize>,
}

impl<'a> Frontmatter<'a> {
    /// Find the block opened by the document's first line and closed by the
    /// nearest following `---` line.
    pub fn locate(document: &'a str) -> Result<Self> {
        let mut lines = document.split_inclusive('\n');

        let opening = lines.next().ok_or(BlogError::NoFrontmatter)?;
        if !is_delimiter(opening) || !opening.ends_with('\n') {
            return Err(BlogError::NoFrontmatter);
        }

        let start = opening.len();
        let mut offset = start;

        for line in lines {
            if is_delimiter(line) {
                let end = if offset == start {
                    start
                } else {
                    let before_newline = offset - 1;
                    if before_newline > start && document.as_bytes()[before_newline - 1] == b'\r'
                    {
                        before_newline - 1
                    } else {
                        before_newline
                    }
                };

                return Ok(Frontmatter {
                    document,
                    inner: start..end,
                    closing: offset..offset + line.len(),
                });
            }
            offset += line.len();
        }

        Err(BlogError::NoFrontmatter)
    }

    /// Text between the delimiters.
    pub fn inner(&self) -> &'a str {
        &self.document[self.inner.clone()]
    }

    /// Byte span of [`Frontmatter::inner`] within the document.
    pub fn span(&self) -> Range<usize> {
        self.inner.clone()
    }

    /// Line break used by the opening delimiter, `\r\n` or `\n`.
    pub fn line_ending(&self) -> &'static str {
        if self.document[..self.inner.start].ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Everything after the closing delimiter line.
    pub fn body(&self) -> &'a str {
        &self.document[self.closing.end..]
    }

    /// Replace the inner text with `updated`, leaving every byte outside the
    /// original span untouched.
    pub fn splice(&self, updated: &str) -> String {
        let mut output = String::with_capacity(self.document.len() + updated.len());
        output.push_str(&self.document[..self.inner.start]);
        output.push_str(updated);

        // An empty block has no line break of its own before the closing delimiter.
        if self.inner.end == self.closing.start && !updated.is_empty() {
            output.push_str(self.line_ending());
        }

        output.push_str(&self.document[self.inner.end..]);
        output
    }
}
