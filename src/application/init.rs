//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Initialize blogctl at the specified path, returning the config location.
pub fn init(path: &Path) -> Result<PathBuf> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .blogctl directory
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    let config_path = path.join(".blogctl").join("config.toml");
    info!(path = %config_path.display(), "initialized site");
    Ok(config_path)
}
