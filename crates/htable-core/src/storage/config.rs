//! Configuration management
//!
//! Table defaults stored in a TOML config file.
//! Priority: CLI argument > config.toml > HTABLE_EMPTY_TEXT environment variable > built-in default

use super::Result;
use crate::error::StorageError;
use crate::table::{DEFAULT_SORT_FIELD_NAME, DEFAULT_SORT_ORDER_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EMPTY_TEXT: &str = "No results found.";
const EMPTY_TEXT_ENV: &str = "HTABLE_EMPTY_TEXT";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Query parameter carrying the sort column id
    pub sort_field_name: Option<String>,
    /// Query parameter carrying the sort direction
    pub sort_order_name: Option<String>,
    /// Text shown when there are no rows
    pub empty_text: Option<String>,
    /// HTML-escape labels and text cells
    pub escape: Option<bool>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = read_file(&config_path)?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse {}: {}", config_path.display(), e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("htable");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    pub fn get_sort_field_name(&self) -> String {
        self.sort_field_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT_FIELD_NAME.to_string())
    }

    pub fn get_sort_order_name(&self) -> String {
        self.sort_order_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT_ORDER_NAME.to_string())
    }

    /// Get empty text with fallback to environment variable
    pub fn get_empty_text(&self) -> String {
        self.empty_text
            .clone()
            .or_else(|| std::env::var(EMPTY_TEXT_ENV).ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_EMPTY_TEXT.to_string())
    }

    pub fn get_escape(&self) -> bool {
        self.escape.unwrap_or(true)
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.sort_field_name.is_none());
        assert_eq!(config.get_sort_field_name(), "sort");
        assert_eq!(config.get_sort_order_name(), "order");
        assert!(config.get_escape());
    }

    #[test]
    fn test_empty_text_env_fallback() {
        // Save original state
        let original = std::env::var(EMPTY_TEXT_ENV).ok();

        unsafe {
            std::env::set_var(EMPTY_TEXT_ENV, "Nothing to show");
        }
        assert_eq!(Config::default().get_empty_text(), "Nothing to show");

        let config = Config {
            empty_text: Some("Empty".to_string()),
            ..Config::default()
        };
        assert_eq!(config.get_empty_text(), "Empty");

        unsafe {
            std::env::remove_var(EMPTY_TEXT_ENV);
        }
        assert_eq!(Config::default().get_empty_text(), DEFAULT_EMPTY_TEXT);

        // Restore original state
        unsafe {
            if let Some(value) = original {
                std::env::set_var(EMPTY_TEXT_ENV, value);
            }
        }
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            sort_field_name: Some("s".to_string()),
            sort_order_name: Some("dir".to_string()),
            empty_text: Some("None yet".to_string()),
            escape: Some(false),
        };

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
        assert_eq!(loaded_config.get_sort_field_name(), "s");
        assert!(!loaded_config.get_escape());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(nonexistent_path)).expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "sort_field_name = [").expect("Failed to write file");

        let err = Config::load(Some(path)).expect_err("invalid toml must fail");
        assert!(matches!(err, StorageError::ConfigParseError { .. }));
    }
}
