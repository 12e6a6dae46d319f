use meter_core::FileCandidate;
use meter_core::context::{AppConfig, Discovery, discover};
use std::path::Path;

/// Holds all state for the CLI application.
/// Parse results are not kept; every parse starts from an empty table.
pub struct CliContext {
    pub config: AppConfig,
    pub discovery: Option<Discovery>,
    /// Candidates newest first, as last listed to the user
    pub ranked: Vec<FileCandidate>,
}

impl CliContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            discovery: None,
            ranked: Vec::new(),
        }
    }

    /// Walk the configured log directory again
    pub fn rescan(&mut self) {
        let dir = Path::new(&self.config.log_directory);
        match discover(dir, &self.config.log_file_name, self.config.max_files) {
            Ok(found) => {
                tracing::info!(files = found.len(), "Indexed combat log files");
                self.ranked = found.ranked();
                self.discovery = Some(found);
            }
            Err(e) => {
                tracing::error!(error = %e, "File discovery failed");
                self.ranked.clear();
                self.discovery = None;
            }
        }
    }

    pub fn latest(&self) -> Option<&FileCandidate> {
        self.discovery.as_ref().and_then(|d| d.latest.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rescan_indexes_configured_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("session")).unwrap();
        fs::write(dir.path().join("session/Combat"), r#"{"Messages":[]}"#).unwrap();

        let config = AppConfig::with_log_directory(dir.path().to_string_lossy().to_string());
        let mut ctx = CliContext::new(config);
        ctx.rescan();

        assert_eq!(ctx.ranked.len(), 1);
        assert_eq!(ctx.latest().unwrap().path, dir.path().join("session/Combat"));
    }

    #[test]
    fn test_rescan_missing_directory_clears_index() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let mut ctx = CliContext::new(AppConfig::with_log_directory(
            missing.to_string_lossy().to_string(),
        ));
        ctx.rescan();

        assert!(ctx.ranked.is_empty());
        assert!(ctx.latest().is_none());
    }
}
