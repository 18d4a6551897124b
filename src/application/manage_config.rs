//! Config management use case

use crate::error::{BlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};

const VALID_KEYS: &str = "posts_dir, index_file, site_name, components_dir, created";

/// Service for managing site configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "posts_dir" => Ok(config.posts_dir),
            "index_file" => Ok(config.index_file),
            "site_name" => Ok(config.site_name),
            "components_dir" => Ok(config.components_dir),
            "created" => Ok(config
                .created
                .map(|created| created.to_rfc3339())
                .unwrap_or_else(|| "(not initialized)".to_string())),
            _ => Err(BlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.repository.is_initialized() {
            return Err(BlogError::Config(format!(
                "No .blogctl directory in {}. Run 'blogctl init' first.",
                self.repository.root().display()
            )));
        }

        let mut config = self.repository.load_config()?;
        let value = value.trim();
        if value.is_empty() {
            return Err(BlogError::Config(format!("Value for '{}' cannot be empty", key)));
        }

        match key {
            "posts_dir" => config.posts_dir = value.to_string(),
            "index_file" => config.index_file = value.to_string(),
            "site_name" => config.site_name = value.to_string(),
            "components_dir" => config.components_dir = value.to_string(),
            "created" => {
                return Err(BlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
