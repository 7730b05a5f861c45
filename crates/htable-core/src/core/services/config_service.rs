//! Configuration service for managing table defaults

use super::types::ConfigUpdate;
use crate::AppError;
use crate::error::UtilsError;
use crate::storage::config::Config;
use crate::utils::validation::validate_param_name;
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sort_field_name(&self) -> String {
        self.config.get_sort_field_name()
    }

    pub fn sort_order_name(&self) -> String {
        self.config.get_sort_order_name()
    }

    pub fn empty_text(&self) -> String {
        self.config.get_empty_text()
    }

    pub fn escape(&self) -> bool {
        self.config.get_escape()
    }

    /// Apply an update after validating parameter names
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<(), AppError> {
        if let Some(name) = &update.sort_field_name {
            validate_param_name(name)?;
        }
        if let Some(name) = &update.sort_order_name {
            validate_param_name(name)?;
        }

        let field_name = update
            .sort_field_name
            .clone()
            .unwrap_or_else(|| self.config.get_sort_field_name());
        let order_name = update
            .sort_order_name
            .clone()
            .unwrap_or_else(|| self.config.get_sort_order_name());
        if field_name == order_name {
            return Err(UtilsError::Validation {
                message: format!(
                    "Sort field and sort order parameters must differ (both '{}')",
                    field_name
                ),
            }
            .into());
        }

        if update.sort_field_name.is_some() {
            self.config.sort_field_name = update.sort_field_name;
        }
        if update.sort_order_name.is_some() {
            self.config.sort_order_name = update.sort_order_name;
        }
        if update.empty_text.is_some() {
            self.config.empty_text = update.empty_text;
        }
        if update.escape.is_some() {
            self.config.escape = update.escape;
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_service_defaults() {
        let service = ConfigService::new(Config::default());
        assert_eq!(service.sort_field_name(), "sort");
        assert_eq!(service.sort_order_name(), "order");
        assert!(service.escape());
    }

    #[test]
    fn test_apply_update() {
        let mut service = ConfigService::new(Config::default());
        service
            .apply(ConfigUpdate {
                sort_field_name: Some("by".to_string()),
                empty_text: Some("Nothing".to_string()),
                escape: Some(false),
                ..ConfigUpdate::default()
            })
            .expect("valid update");

        assert_eq!(service.sort_field_name(), "by");
        assert_eq!(service.sort_order_name(), "order");
        assert_eq!(service.empty_text(), "Nothing");
        assert!(!service.escape());
    }

    #[test]
    fn test_apply_rejects_invalid_names() {
        let mut service = ConfigService::new(Config::default());
        let result = service.apply(ConfigUpdate {
            sort_order_name: Some("a&b".to_string()),
            ..ConfigUpdate::default()
        });
        assert!(result.is_err());
        assert_eq!(service.config(), &Config::default());
    }

    #[test]
    fn test_apply_rejects_same_names() {
        let mut service = ConfigService::new(Config {
            sort_order_name: Some("dir".to_string()),
            ..Config::default()
        });
        let result = service.apply(ConfigUpdate {
            sort_field_name: Some("dir".to_string()),
            ..ConfigUpdate::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_save_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");

        let mut service = ConfigService::new(Config::default());
        service
            .apply(ConfigUpdate {
                empty_text: Some("Empty".to_string()),
                ..ConfigUpdate::default()
            })
            .expect("valid update");
        service.save_config(Some(path.clone())).expect("Failed to save");

        let loaded = Config::load(Some(path)).expect("Failed to load");
        assert_eq!(loaded.empty_text, Some("Empty".to_string()));
    }

    #[test]
    fn test_config_update_is_empty() {
        assert!(ConfigUpdate::default().is_empty());
        assert!(
            !ConfigUpdate {
                escape: Some(true),
                ..ConfigUpdate::default()
            }
            .is_empty()
        );
    }
}
