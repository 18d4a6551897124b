//! Generate post index use case

use crate::domain::post_date::parse_display_date;
use crate::domain::{excerpt, PostMetadata};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PostEntry, SiteRepository};
use serde::Serialize;
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// One post in `post-index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub filename: String,
    pub title: String,
    pub date: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub excerpt: String,
}

impl IndexEntry {
    pub fn from_post(filename: &str, content: &str) -> Self {
        let (metadata, body) = PostMetadata::parse(content);

        IndexEntry {
            filename: filename.to_string(),
            title: metadata
                .title
                .unwrap_or_else(|| title_from_filename(filename)),
            date: metadata.date.unwrap_or_default(),
            categories: metadata.categories,
            tags: metadata.tags,
            image: metadata.image,
            excerpt: excerpt(body),
        }
    }
}

fn title_from_filename(filename: &str) -> String {
    let leaf = filename.rsplit('/').next().unwrap_or(filename);
    leaf.strip_suffix(".md").unwrap_or(leaf).replace('-', " ")
}

/// Newest first; undated or unparseable dates last, ties by filename.
fn compare_entries(a: &IndexEntry, b: &IndexEntry) -> Ordering {
    match (parse_display_date(&a.date), parse_display_date(&b.date)) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.filename.cmp(&b.filename)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.filename.cmp(&b.filename),
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Output file relative to the site root; the configured index file when absent
    pub output: Option<PathBuf>,
    pub recursive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub path: PathBuf,
    pub entries: Vec<IndexEntry>,
}

/// Service for writing the JSON post index
pub struct GenerateIndexService {
    repository: FileSystemRepository,
}

impl GenerateIndexService {
    pub fn new(repository: FileSystemRepository) -> Self {
        GenerateIndexService { repository }
    }

    pub fn execute(&self, options: IndexOptions) -> Result<IndexReport> {
        let config = self.repository.load_config()?;
        let posts = self.repository.list_posts(&config, options.recursive)?;

        let mut entries = Vec::with_capacity(posts.len());
        for PostEntry { filename, path } in &posts {
            let content = fs::read_to_string(path)?;
            debug!(post = %filename, "indexing post");
            entries.push(IndexEntry::from_post(filename, &content));
        }
        entries.sort_by(compare_entries);

        let relative = options
            .output
            .unwrap_or_else(|| PathBuf::from(&config.index_file));
        let json = serde_json::to_string_pretty(&entries)?;
        let path = self.repository.write_file(&relative, &json)?;
        info!(path = %path.display(), count = entries.len(), "wrote post index");

        Ok(IndexReport { path, entries })
    }
}
