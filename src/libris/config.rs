use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG_FILE: &str = "library.json";

/// Configuration for libris, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// File name of the catalog inside the data directory
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
}

fn default_catalog_file() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
        }
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    pub fn catalog_file(&self) -> &str {
        &self.catalog_file
    }
}
