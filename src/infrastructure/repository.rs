//! File system repository

use crate::error::{BlogError, Result};
use crate::infrastructure::config::CONFIG_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A markdown post found in the posts directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEntry {
    /// Path relative to the posts directory, `/`-separated
    pub filename: String,
    pub path: PathBuf,
}

impl PostEntry {
    pub fn new(filename: String, path: PathBuf) -> Self {
        PostEntry { filename, path }
    }
}

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from .blogctl/config.toml (defaults when absent)
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .blogctl/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .blogctl directory exists
    fn is_initialized(&self) -> bool;

    /// Create .blogctl directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the site root.
    /// Checks BLOGCTL_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BLOGCTL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(BlogError::Config(format!(
                    "BLOGCTL_ROOT is set to '{}' but no .blogctl directory found. \
                    Run 'blogctl init' in that directory or unset BLOGCTL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::discover_from(&current_dir))
    }

    /// Walk up from `start` looking for a .blogctl directory.
    /// Falls back to `start` itself so plain blog checkouts work without init.
    pub fn discover_from(start: &Path) -> Self {
        let found = start
            .ancestors()
            .find(|candidate| Self::has_config_dir(candidate))
            .unwrap_or(start);

        tracing::debug!(root = %found.display(), "resolved site root");
        FileSystemRepository::new(found.to_path_buf())
    }

    /// Check if a path contains a .blogctl directory
    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(BlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }
}

// File operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Absolute path of the configured posts directory
    pub fn posts_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.posts_dir)
    }

    /// Path of a post inside the posts directory
    pub fn post_path(&self, config: &Config, filename: &str) -> PathBuf {
        self.posts_dir(config).join(filename)
    }

    /// Read a post; a missing file is a FileNotFound error
    pub fn read_post(&self, config: &Config, filename: &str) -> Result<String> {
        let path = self.post_path(config, filename);

        if !path.is_file() {
            return Err(BlogError::FileNotFound(path));
        }

        fs::read_to_string(&path).map_err(BlogError::Io)
    }

    /// Check if a file exists relative to the site root
    pub fn file_exists(&self, relative: &Path) -> bool {
        self.root.join(relative).exists()
    }

    /// Read a file relative to the site root
    pub fn read_file(&self, relative: &Path) -> Result<String> {
        let path = self.root.join(relative);

        if !path.is_file() {
            return Err(BlogError::FileNotFound(path));
        }

        fs::read_to_string(&path).map_err(BlogError::Io)
    }

    /// Write a file relative to the site root (creates parents, overwrites if exists)
    pub fn write_file(&self, relative: &Path, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_file_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.blogctl-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("post.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BlogError::Io(e));
        }
        Ok(())
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn post_entry(posts_dir: &Path, path: &Path) -> Option<PostEntry> {
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            return None;
        }
        let rel = path.strip_prefix(posts_dir).ok()?;
        let filename = Self::normalize_relative_path(rel)?;
        Some(PostEntry::new(filename, path.to_path_buf()))
    }

    fn collect_top_level_posts(&self, posts_dir: &Path) -> Result<Vec<PostEntry>> {
        let mut posts = Vec::new();

        for entry in fs::read_dir(posts_dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(post) = Self::post_entry(posts_dir, &path) {
                posts.push(post);
            }
        }

        Ok(posts)
    }

    fn collect_recursive_posts(&self, posts_dir: &Path) -> Vec<PostEntry> {
        let mut posts = Vec::new();

        let walker = WalkDir::new(posts_dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                tracing::warn!("skipping unreadable entry under {}", posts_dir.display());
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(post) = Self::post_entry(posts_dir, entry.path()) {
                posts.push(post);
            }
        }

        posts
    }

    /// List markdown posts sorted by filename.
    /// A missing posts directory is a FileNotFound error.
    pub fn list_posts(&self, config: &Config, recursive: bool) -> Result<Vec<PostEntry>> {
        let posts_dir = self.posts_dir(config);
        if !posts_dir.is_dir() {
            return Err(BlogError::FileNotFound(posts_dir));
        }

        let mut posts = if recursive {
            self.collect_recursive_posts(&posts_dir)
        } else {
            self.collect_top_level_posts(&posts_dir)?
        };

        posts.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(posts)
    }
}
