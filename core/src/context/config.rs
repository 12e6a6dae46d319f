//! Application configuration
//!
//! This module re-exports shared types from meter-types and provides the
//! platform-specific default log directory and persistence for AppConfig.

pub use meter_types::{AppConfig, CapacityLimits, TruncationMode};

use super::ConfigError;
use std::path::PathBuf;

const APP_NAME: &str = "pantheon-meter";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// `%LOCALAPPDATA%\Temp\Visionary Realms\Pantheon` on Windows, the local data
/// directory equivalent elsewhere.
pub fn default_log_directory() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("Temp").join("Visionary Realms").join("Pantheon"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_with_defaults() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
}

impl AppConfigExt for AppConfig {
    /// Load the stored config, falling back to defaults if it can't be read
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::load_with_defaults()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        let mut config: AppConfig = confy::load(APP_NAME, CONFIG_NAME)?;
        if config.log_directory.is_empty() {
            config.log_directory = default_log_directory();
        }
        Ok(config)
    }

    /// Load with platform-specific defaults (used when no config file exists)
    fn load_with_defaults() -> Self {
        AppConfig::with_log_directory(default_log_directory())
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)?)
    }
}
