use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::favorites::SAVED_RECIPES_KEY;

/// Application settings
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory holding persisted key-value data
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Storage key for the saved-recipes list
    #[serde(default = "default_saved_key")]
    pub saved_key: String,
    /// Catalog JSON file; the bundled catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            saved_key: default_saved_key(),
            catalog_path: None,
        }
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".recipe-box")
}

fn default_saved_key() -> String {
    SAVED_RECIPES_KEY.to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOX__ prefix
    /// 2. recipe-box.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOX__STORAGE_DIR
    pub fn load() -> Result<Self, ConfigError> {
        load_config("recipe-box")
    }
}

/// Load configuration from `<file_stem>.toml` (optional) and the environment
pub fn load_config(file_stem: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(file_stem).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BOX")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.storage_dir, PathBuf::from(".recipe-box"));
        assert_eq!(config.saved_key, "saved_recipes");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let stem = dir.path().join("settings");
        std::fs::write(
            dir.path().join("settings.toml"),
            "storage_dir = \"/tmp/recipes\"\nsaved_key = \"favorites\"\n",
        )
        .unwrap();

        let config = load_config(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/recipes"));
        assert_eq!(config.saved_key, "favorites");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let stem = dir.path().join("missing");

        let config = load_config(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.saved_key, "saved_recipes");
    }
}
