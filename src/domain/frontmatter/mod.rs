//! Frontmatter handling

pub mod block;
pub mod field;
pub mod metadata;
pub mod tags;

pub use block::Frontmatter;
pub use field::{ListField, Notation};
pub use metadata::PostMetadata;
pub use tags::{add_tags, merge_tags, parse_tag_list, TagNotation, TagUpdate};
