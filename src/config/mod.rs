//! Configuration module for shelfr
//!
//! Manages application configuration including store paths and the tag
//! selection policy. Configuration is stored in the user's config
//! directory.

mod setup;

pub use setup::first_time_setup;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::session::TagSelectMode;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ShelfrConfig {
    /// Map of store names to their filesystem paths
    #[serde(default)]
    pub stores: HashMap<String, PathBuf>,

    /// The default store to use when none is specified
    #[serde(default)]
    pub default_store: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// What re-selecting the active tag does (toggle or set)
    #[serde(default)]
    pub tag_select: TagSelectMode,
}

impl ShelfrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("shelfr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve a `--store` argument to a filesystem path
    ///
    /// A configured store name wins; anything else is treated as a literal
    /// path. With no argument, the configured default store is used,
    /// falling back to `<data dir>/shelfr/store`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured default names an unknown
    /// store, or no data directory can be determined for the fallback.
    pub fn resolve_store(&self, arg: Option<&str>) -> Result<PathBuf, ConfigError> {
        if let Some(arg) = arg {
            if let Some(path) = self.stores.get(arg) {
                return Ok(path.clone());
            }
            return Ok(PathBuf::from(arg));
        }

        if let Some(name) = &self.default_store {
            return self.stores.get(name).cloned().ok_or_else(|| {
                ConfigError::Message(format!("Default store '{name}' is not configured"))
            });
        }

        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("shelfr").join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfrConfig::default();
        assert!(config.stores.is_empty());
        assert_eq!(config.default_store, None);
        assert!(!config.quiet);
        assert_eq!(config.tag_select, TagSelectMode::Toggle);
    }

    #[test]
    fn test_resolve_named_store() {
        let mut config = ShelfrConfig::default();
        config
            .stores
            .insert("shop".to_string(), PathBuf::from("/data/shop"));

        let path = config.resolve_store(Some("shop")).unwrap();
        assert_eq!(path, PathBuf::from("/data/shop"));
    }

    #[test]
    fn test_resolve_literal_path() {
        let config = ShelfrConfig::default();
        let path = config.resolve_store(Some("/tmp/somewhere")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn test_resolve_default_store() {
        let mut config = ShelfrConfig::default();
        config
            .stores
            .insert("shop".to_string(), PathBuf::from("/data/shop"));
        config.default_store = Some("shop".to_string());

        let path = config.resolve_store(None).unwrap();
        assert_eq!(path, PathBuf::from("/data/shop"));
    }

    #[test]
    fn test_resolve_misconfigured_default_errors() {
        let mut config = ShelfrConfig::default();
        config.default_store = Some("ghost".to_string());

        assert!(config.resolve_store(None).is_err());
    }

    #[test]
    fn test_tag_select_round_trips_through_toml() {
        let mut config = ShelfrConfig::default();
        config.tag_select = TagSelectMode::Set;

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: ShelfrConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.tag_select, TagSelectMode::Set);
    }
}
