//! Error types for context operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors during log file discovery
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to read directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no combat log files found in {path}")]
    NoCandidates { path: PathBuf },
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}
