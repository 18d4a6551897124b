//! Publish dates as written in post frontmatter

use crate::error::{BlogError, Result};
use chrono::NaiveDate;

/// Display format used in frontmatter, e.g. "January 17, 2025".
pub const DISPLAY_FORMAT: &str = "%B %d, %Y";

/// Format accepted on the command line, e.g. "2025-01-17".
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` command-line date.
pub fn parse_input_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), INPUT_FORMAT)
        .map_err(|_| BlogError::InvalidDate(input.to_string()))
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse a frontmatter date written in display format.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_FORMAT).ok()
}
