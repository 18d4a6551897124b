//! Application layer - Use cases and orchestration

pub mod add_tags;
pub mod create_page;
pub mod create_post;
pub mod generate_index;
pub mod init;
pub mod manage_config;

pub use add_tags::{AddTagsOptions, AddTagsReport, AddTagsService};
pub use create_page::{CreatePageOptions, CreatePageService, NavLinkOutcome};
pub use create_post::{CreatePostOptions, CreatePostService};
pub use generate_index::{GenerateIndexService, IndexEntry, IndexOptions, IndexReport};
pub use manage_config::ConfigService;
