//! Configuration module for pickup
//!
//! Manages application configuration including picker and upload
//! defaults. Configuration is stored in the user's config directory.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::picker::CancelBehavior;

/// Upload-related defaults
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UploadDefaults {
    /// Request timeout in seconds; the client default applies when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PickupConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Directory picker scans start from; the current directory when absent
    #[serde(default)]
    pub browse_dir: Option<PathBuf>,

    /// Default accepted-entries filter applied when a command passes none
    #[serde(default)]
    pub accepted: Vec<String>,

    /// What a cancelled prompt produces
    #[serde(default)]
    pub on_cancel: CancelBehavior,

    /// Upload defaults
    #[serde(default)]
    pub upload: UploadDefaults,
}

impl PickupConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        let pickup_config_dir = config_dir.join("pickup");
        Ok(pickup_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
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
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
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
}
