//! Create post use case

use crate::domain::post_date::{display_date, parse_input_date};
use crate::domain::{load_template, post_filename, POST_TEMPLATE_NAME};
use crate::error::{BlogError, Result};
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct CreatePostOptions {
    pub title: String,
    /// Publish date as `YYYY-MM-DD`; today when absent
    pub date: Option<String>,
    pub force: bool,
}

/// Service for creating new posts from the post template
pub struct CreatePostService {
    repository: FileSystemRepository,
}

impl CreatePostService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CreatePostService { repository }
    }

    pub fn execute(&self, options: CreatePostOptions) -> Result<PathBuf> {
        self.execute_on(options, Local::now().date_naive())
    }

    /// Create the post, using `today` when no date was given.
    pub fn execute_on(&self, options: CreatePostOptions, today: NaiveDate) -> Result<PathBuf> {
        let title = options.title.trim();
        if title.is_empty() {
            return Err(BlogError::MissingArgument("post title".to_string()));
        }

        let filename = post_filename(title).ok_or_else(|| {
            BlogError::MissingArgument(format!(
                "post title '{}' has no letters or digits to build a filename from",
                title
            ))
        })?;

        let date = match options.date.as_deref() {
            Some(input) => parse_input_date(input)?,
            None => today,
        };

        let config = self.repository.load_config()?;
        let relative = Path::new(&config.posts_dir).join(&filename);

        if self.repository.file_exists(&relative) && !options.force {
            return Err(BlogError::Config(format!(
                "Post already exists: {}. Use --force to overwrite it.",
                self.repository.root().join(&relative).display()
            )));
        }

        let template = load_template(self.repository.root(), POST_TEMPLATE_NAME)?;
        let date_text = display_date(date);
        let content = template.render(&[("TITLE", title), ("DATE", date_text.as_str())]);

        let path = self.repository.write_file(&relative, &content)?;
        info!(path = %path.display(), "created post");

        Ok(path)
    }
}
