use super::DiscoveryError;
use crate::ranking::{FileCandidate, LatestTracker, rank};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Combat log files found under a directory tree, in walk order
#[derive(Debug, Clone)]
pub struct Discovery {
    pub base: PathBuf,
    pub candidates: Vec<FileCandidate>,
    /// Newest match seen during the walk, including files past the limit
    pub latest: Option<FileCandidate>,
    /// Matches left out because `max_files` was reached
    pub skipped: usize,
}

impl Discovery {
    /// All candidates, newest first
    pub fn ranked(&self) -> Vec<FileCandidate> {
        rank(self.candidates.clone())
    }

    pub fn newest(&self) -> Result<&FileCandidate, DiscoveryError> {
        self.latest.as_ref().ok_or_else(|| DiscoveryError::NoCandidates {
            path: self.base.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

struct Walk<'a> {
    file_name: &'a str,
    max_files: usize,
    candidates: Vec<FileCandidate>,
    tracker: LatestTracker,
    skipped: usize,
}

/// Recursively collect files named exactly `file_name` below `base`.
///
/// Directory entries are visited in file-name order. Unreadable
/// subdirectories are logged and skipped; an unreadable `base` is an error.
pub fn discover(
    base: &Path,
    file_name: &str,
    max_files: usize,
) -> Result<Discovery, DiscoveryError> {
    let mut walk = Walk {
        file_name,
        max_files,
        candidates: Vec::new(),
        tracker: LatestTracker::new(),
        skipped: 0,
    };

    tracing::info!(path = %base.display(), "Searching directory");
    walk.visit(read_sorted_dir(base)?);

    if walk.skipped > 0 {
        tracing::warn!(
            max_files,
            skipped = walk.skipped,
            "Maximum file limit reached, some log files are not listed"
        );
    }

    Ok(Discovery {
        base: base.to_path_buf(),
        candidates: walk.candidates,
        latest: walk.tracker.into_latest(),
        skipped: walk.skipped,
    })
}

impl Walk<'_> {
    fn visit(&mut self, entries: Vec<fs::DirEntry>) {
        for entry in entries {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                match read_sorted_dir(&path) {
                    Ok(children) => self.visit(children),
                    Err(e) => tracing::warn!(error = %e, "Skipping unreadable directory"),
                }
            } else if file_type.is_file() && entry.file_name() == self.file_name {
                self.add(entry, path);
            }
        }
    }

    fn add(&mut self, entry: fs::DirEntry, path: PathBuf) {
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(time) => DateTime::<Utc>::from(time),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read file metadata");
                return;
            }
        };

        let candidate = FileCandidate::new(path, modified);
        self.tracker.observe(&candidate);

        if self.candidates.len() < self.max_files {
            self.candidates.push(candidate);
        } else {
            self.skipped += 1;
        }
    }
}

fn read_sorted_dir(dir: &Path) -> Result<Vec<fs::DirEntry>, DiscoveryError> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|source| DiscoveryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|e| e.ok())
        .collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
