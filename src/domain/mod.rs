//! Domain layer - Text transformations on posts and pages

pub mod excerpt;
pub mod frontmatter;
pub mod nav;
pub mod post_date;
pub mod slug;
pub mod template;

pub use excerpt::excerpt;
pub use frontmatter::{add_tags, parse_tag_list, Frontmatter, PostMetadata, TagNotation, TagUpdate};
pub use slug::{post_filename, slugify};
pub use template::{load_template, Template, PAGE_TEMPLATE_NAME, POST_TEMPLATE_NAME};
