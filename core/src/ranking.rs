//! Ordering and selection of candidate log files by modification time.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub modified_time: DateTime<Utc>,
}

impl FileCandidate {
    pub fn new(path: impl Into<PathBuf>, modified_time: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            modified_time,
        }
    }

    /// Local modification time for listings, e.g. `03/01/2024 - 5:07 PM`
    pub fn formatted_modified(&self) -> String {
        self.modified_time
            .with_timezone(&Local)
            .format("%m/%d/%Y - %-I:%M %p")
            .to_string()
    }
}

/// Newest first. Equal timestamps keep their discovery order.
pub fn rank(mut candidates: Vec<FileCandidate>) -> Vec<FileCandidate> {
    // sort_by is stable
    candidates.sort_by(|a, b| b.modified_time.cmp(&a.modified_time));
    candidates
}

/// Running maximum over candidates as they are discovered. Only a strictly
/// newer file replaces the current one, so the first of several equal
/// timestamps wins.
#[derive(Debug, Clone, Default)]
pub struct LatestTracker {
    latest: Option<FileCandidate>,
}

impl LatestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `candidate` became the new latest
    pub fn observe(&mut self, candidate: &FileCandidate) -> bool {
        let newer = self
            .latest
            .as_ref()
            .is_none_or(|current| candidate.modified_time > current.modified_time);
        if newer {
            self.latest = Some(candidate.clone());
        }
        newer
    }

    pub fn latest(&self) -> Option<&FileCandidate> {
        self.latest.as_ref()
    }

    pub fn into_latest(self) -> Option<FileCandidate> {
        self.latest
    }
}

pub fn latest(candidates: &[FileCandidate]) -> Option<&FileCandidate> {
    candidates.iter().fold(None, |current: Option<&FileCandidate>, c| match current {
        Some(cur) if c.modified_time <= cur.modified_time => Some(cur),
        _ => Some(c),
    })
}

/// Result of resolving a human-facing, 1-based list index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Chosen(&'a FileCandidate),
    /// Index 0 or past the end of the list
    Cancelled,
}

pub fn select(ranked: &[FileCandidate], index: usize) -> Selection<'_> {
    match index.checked_sub(1).and_then(|i| ranked.get(i)) {
        Some(candidate) => Selection::Chosen(candidate),
        None => Selection::Cancelled,
    }
}
