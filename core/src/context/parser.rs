use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::combat_log::{EventExtractor, RawMessage, ReaderError, read_messages};
use crate::context::AppConfig;
use crate::stats::{RecordOutcome, StatsTable};

/// One pass over one log file.
///
/// Owns the stats table for the pass; nothing carries over to the next
/// session.
pub struct ParsingSession {
    pub active_file: Option<PathBuf>,
    extractor: EventExtractor,
    table: StatsTable,
    message_count: usize,
    event_count: usize,
    rejected_messages: usize,
}

impl ParsingSession {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            active_file: None,
            extractor: EventExtractor::from_config(config),
            table: StatsTable::new(config.limits),
            message_count: 0,
            event_count: 0,
            rejected_messages: 0,
        }
    }

    pub fn for_file(path: PathBuf, config: &AppConfig) -> Self {
        Self {
            active_file: Some(path),
            ..Self::new(config)
        }
    }

    /// Run a message through the extractor and, if it is a damage event,
    /// into the table. Rejected messages are logged and counted.
    pub fn process_message(&mut self, message: &RawMessage) -> Option<RecordOutcome> {
        self.message_count += 1;

        let event = match self.extractor.extract(&message.text) {
            Ok(event) => event?,
            Err(e) => {
                self.rejected_messages += 1;
                tracing::debug!(position = message.position, error = %e, "Rejected message");
                return None;
            }
        };

        self.event_count += 1;
        Some(self.table.record_at(&event, message.timestamp))
    }

    pub fn process_messages<'a>(&mut self, messages: impl IntoIterator<Item = &'a RawMessage>) {
        for message in messages {
            self.process_message(message);
        }
    }

    pub fn table(&self) -> &StatsTable {
        &self.table
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn rejected_messages(&self) -> usize {
        self.rejected_messages
    }

    pub fn into_table(self) -> StatsTable {
        self.table
    }
}

/// Resolve a log file path, joining with log_directory if relative.
pub fn resolve_log_path(config: &AppConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&config.log_directory).join(path)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Parsing Helper
// ─────────────────────────────────────────────────────────────────────────────

/// Result of parsing a log file
pub struct ParseResult {
    pub path: PathBuf,
    pub table: StatsTable,
    pub message_count: usize,
    pub event_count: usize,
    /// Records without a string `Message` field
    pub skipped_messages: usize,
    /// Damage messages refused by the extractor
    pub rejected_messages: usize,
    pub end_pos: u64,
    pub elapsed_ms: u128,
}

/// Parse an entire log file into a fresh stats table.
pub fn parse_file(path: &Path, config: &AppConfig) -> Result<ParseResult, ReaderError> {
    let timer = Instant::now();
    tracing::info!(path = %path.display(), "Opening log file");

    let read = read_messages(path)?;

    let mut session = ParsingSession::for_file(path.to_path_buf(), config);
    session.process_messages(&read.messages);

    let result = ParseResult {
        path: path.to_path_buf(),
        message_count: session.message_count(),
        event_count: session.event_count(),
        skipped_messages: read.skipped,
        rejected_messages: session.rejected_messages(),
        end_pos: read.end_pos,
        elapsed_ms: timer.elapsed().as_millis(),
        table: session.into_table(),
    };

    tracing::info!(
        messages = result.message_count,
        events = result.event_count,
        players = result.table.len(),
        elapsed_ms = result.elapsed_ms as u64,
        "Parsed log file"
    );

    Ok(result)
}
