//! Configuration management

use crate::error::{BlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".blogctl";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub posts_dir: String,
    pub index_file: String,
    pub site_name: String,
    pub components_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            posts_dir: "posts".to_string(),
            index_file: "post-index.json".to_string(),
            site_name: "My Blog".to_string(),
            components_dir: "components".to_string(),
            created: None,
        }
    }
}

impl Config {
    /// Create a new config with default values, stamped with the current time
    pub fn new() -> Self {
        Config {
            created: Some(Utc::now()),
            ..Config::default()
        }
    }

    /// Load config from .blogctl/config.toml in the given directory.
    /// A directory without a config file gets the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(BlogError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| BlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .blogctl/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        // Ensure .blogctl directory exists
        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
