//! Add tags use case

use crate::domain::{add_tags, parse_tag_list, TagNotation};
use crate::error::{BlogError, Result};
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AddTagsOptions {
    pub filename: String,
    /// Comma-separated tags as typed on the command line
    pub tags: String,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTagsReport {
    pub path: PathBuf,
    /// Tags supplied on the command line, after trimming
    pub requested: Vec<String>,
    /// Full tag set written to the post
    pub tags: Vec<String>,
    pub notation: TagNotation,
    pub changed: bool,
    pub dry_run: bool,
    pub content: String,
}

/// Service for merging tags into a post's frontmatter
pub struct AddTagsService {
    repository: FileSystemRepository,
}

impl AddTagsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddTagsService { repository }
    }

    /// Merge the tags and rewrite the post. Nothing is written when the post
    /// is missing, has no frontmatter, or `dry_run` is set.
    pub fn execute(&self, options: AddTagsOptions) -> Result<AddTagsReport> {
        let filename = options.filename.trim();
        if filename.is_empty() {
            return Err(BlogError::MissingArgument("post filename".to_string()));
        }

        let requested = parse_tag_list(&options.tags);
        if requested.is_empty() {
            return Err(BlogError::MissingArgument("tags".to_string()));
        }

        let config = self.repository.load_config()?;
        let path = self.repository.post_path(&config, filename);
        debug!(path = %path.display(), "resolved post");

        let original = self.repository.read_post(&config, filename)?;
        let update = add_tags(&original, &requested)?;
        debug!(notation = ?update.notation, "merged tags");

        let changed = update.changed(&original);
        if changed && !options.dry_run {
            self.repository.write_file_atomic(&path, &update.content)?;
            info!(path = %path.display(), tags = ?update.tags, "updated post tags");
        }

        Ok(AddTagsReport {
            path,
            requested,
            changed,
            dry_run: options.dry_run,
            tags: update.tags,
            notation: update.notation,
            content: update.content,
        })
    }
}
