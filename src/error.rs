//! Error types for blogctl

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blogctl
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("No frontmatter found in the post")]
    NoFrontmatter,

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Page error: {0}")]
    Page(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::NoFrontmatter => 2,
            BlogError::FileNotFound(_) => 3,
            BlogError::MissingArgument(_) => 4,
            BlogError::InvalidDate(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogError::NoFrontmatter => "No frontmatter found in the post.\n\n\
                Make sure the post has a frontmatter section at the top:\n\
                ---\n\
                title: My Post\n\
                date: January 17, 2025\n\
                ---"
            .to_string(),
            BlogError::FileNotFound(path) => {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Make sure the post exists in the posts directory\n\
                    • Pass the filename only (e.g., my-post.md), not the full path\n\
                    • Check the configured posts directory: blogctl config posts_dir",
                    path.display()
                )
            }
            BlogError::MissingArgument(what) => {
                format!(
                    "Missing argument: {}\n\n\
                    Usage:\n\
                    blogctl post create \"My Post Title\"\n\
                    blogctl post add-tags my-post-title.md \"tag1, tag2, tag3\"",
                    what
                )
            }
            BlogError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: blogctl post create \"My Post\" --date 2025-01-17",
                    date
                )
            }
            BlogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: posts_dir, index_file, site_name, components_dir, created",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;
