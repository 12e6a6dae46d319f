//! Shared configuration types for the Pantheon combat meter
//!
//! This crate contains serializable configuration types that are shared between
//! the parsing engine (meter-core) and the interactive front end (meter-cli).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// File name the game client gives every combat log it writes.
pub const DEFAULT_LOG_FILE_NAME: &str = "Combat";
pub const DEFAULT_MAX_FILES: usize = 100;
pub const DEFAULT_MAX_NAME_LEN: usize = 50;
pub const DEFAULT_MAX_PLAYERS: usize = 50;
pub const DEFAULT_MAX_ABILITIES: usize = 50;

fn default_log_file_name() -> String {
    DEFAULT_LOG_FILE_NAME.to_string()
}

fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}

fn default_max_players() -> usize {
    DEFAULT_MAX_PLAYERS
}

fn default_max_abilities() -> usize {
    DEFAULT_MAX_ABILITIES
}

// ─────────────────────────────────────────────────────────────────────────────
// Name Truncation
// ─────────────────────────────────────────────────────────────────────────────

/// What the extractor does with an actor or ability name longer than
/// `max_name_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationMode {
    /// Cut the name down to `max_name_len` characters and keep the event.
    #[default]
    Truncate,
    /// Reject the message with an error; the pipeline skips it.
    Reject,
}

// ─────────────────────────────────────────────────────────────────────────────
// Capacity Limits
// ─────────────────────────────────────────────────────────────────────────────

/// Bounds on the stats table.
///
/// Once `max_abilities` is hit for a player, new abilities are dropped but the
/// player's total keeps growing, so the total can exceed the sum of the
/// tracked abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityLimits {
    #[serde(default = "default_max_players")]
    pub max_players: usize,
    #[serde(default = "default_max_abilities")]
    pub max_abilities: usize,
    /// Ignore both caps and grow without bound.
    #[serde(default)]
    pub unbounded: bool,
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            max_abilities: DEFAULT_MAX_ABILITIES,
            unbounded: false,
        }
    }
}

impl CapacityLimits {
    pub fn unbounded() -> Self {
        Self {
            unbounded: true,
            ..Default::default()
        }
    }

    pub fn player_limit(&self) -> Option<usize> {
        (!self.unbounded).then_some(self.max_players)
    }

    pub fn ability_limit(&self) -> Option<usize> {
        (!self.unbounded).then_some(self.max_abilities)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Note: Persistence methods (load/save) are provided by meter-core via the
/// `AppConfigExt` trait, as they require platform-specific dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the directory tree searched for combat logs.
    #[serde(default)]
    pub log_directory: String,
    #[serde(default = "default_log_file_name")]
    pub log_file_name: String,
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
    #[serde(default)]
    pub truncation: TruncationMode,
    #[serde(default)]
    pub limits: CapacityLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_log_directory(String::new())
    }
}

impl AppConfig {
    /// Create a new AppConfig with the specified log directory.
    /// Other fields use their default values.
    pub fn with_log_directory(log_directory: String) -> Self {
        Self {
            log_directory,
            log_file_name: default_log_file_name(),
            max_files: DEFAULT_MAX_FILES,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            truncation: TruncationMode::default(),
            limits: CapacityLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_limits() {
        let config = AppConfig::default();
        assert_eq!(config.log_file_name, "Combat");
        assert_eq!(config.max_files, 100);
        assert_eq!(config.max_name_len, 50);
        assert_eq!(config.truncation, TruncationMode::Truncate);
        assert_eq!(config.limits.player_limit(), Some(50));
        assert_eq!(config.limits.ability_limit(), Some(50));
    }

    #[test]
    fn unbounded_limits_have_no_caps() {
        let limits = CapacityLimits::unbounded();
        assert_eq!(limits.player_limit(), None);
        assert_eq!(limits.ability_limit(), None);
    }
}
