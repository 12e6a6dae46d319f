//! Error types for combat log reading and event extraction

use std::path::PathBuf;
use thiserror::Error;

/// Which part of a message a name was extracted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Actor,
    Ability,
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameField::Actor => write!(f, "actor"),
            NameField::Ability => write!(f, "ability"),
        }
    }
}

/// Errors during damage event extraction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{field} name is {len} characters, limit is {max}")]
    NameTooLong {
        field: NameField,
        len: usize,
        max: usize,
    },
}

/// Errors during log file reading operations
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to open log file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to memory map file {path}")]
    MemoryMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log file {path} is empty")]
    Empty { path: PathBuf },

    #[error("no valid messages found in {path}, check the data for corruption")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
