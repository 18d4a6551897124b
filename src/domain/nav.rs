//! Header navigation links

use crate::error::{BlogError, Result};

const LINK_INDENT: &str = "        ";

/// Outcome of adding a page link to the header component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavUpdate {
    /// New header content with the link inserted.
    Added(String),
    AlreadyLinked,
}

/// Insert `<a href="PAGE.html">TITLE</a>` after the last link inside `<nav>`.
pub fn add_nav_link(header: &str, page_name: &str, title: &str) -> Result<NavUpdate> {
    let href = format!("href=\"{}.html\"", page_name);
    if header.contains(&href) {
        return Ok(NavUpdate::AlreadyLinked);
    }

    let nav_start = header.find("<nav").ok_or_else(|| {
        BlogError::Page("Could not find the navigation section in the header.".to_string())
    })?;
    let nav_end = header[nav_start..]
        .find("</nav>")
        .map(|offset| nav_start + offset)
        .ok_or_else(|| {
            BlogError::Page("Could not find the navigation section in the header.".to_string())
        })?;

    let last_link_end = header[nav_start..nav_end]
        .rfind("</a>")
        .map(|offset| nav_start + offset + "</a>".len())
        .ok_or_else(|| {
            BlogError::Page("Could not find a suitable position to add the link.".to_string())
        })?;

    let link = format!("\n{}<a {}>{}</a>", LINK_INDENT, href, title);
    let mut updated = String::with_capacity(header.len() + link.len());
    updated.push_str(&header[..last_link_end]);
    updated.push_str(&link);
    updated.push_str(&header[last_link_end..]);

    Ok(NavUpdate::Added(updated))
}
