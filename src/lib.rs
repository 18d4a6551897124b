//! blogctl - Static blog content management
//!
//! Creates markdown posts and HTML pages, merges tags into post frontmatter
//! while keeping the tag notation already in use, and builds a JSON index of
//! all posts.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogError;
