use super::{RawMessage, ReaderError};
use chrono::{DateTime, Utc};
use memmap2::Mmap;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct LogDocument {
    #[serde(rename = "Messages")]
    messages: Vec<Value>,
}

/// Messages read from one log file, in source order
#[derive(Debug, Default)]
pub struct ReadMessages {
    pub messages: Vec<RawMessage>,
    /// Records without a string `Message` field
    pub skipped: usize,
    pub end_pos: u64,
}

pub fn read_messages<P: AsRef<Path>>(path: P) -> Result<ReadMessages, ReaderError> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|source| ReaderError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let len = file
        .metadata()
        .map_err(|source| ReaderError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if len == 0 {
        return Err(ReaderError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mmap = unsafe { Mmap::map(&file) }.map_err(|source| ReaderError::MemoryMap {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = mmap.as_ref();

    let (messages, skipped) =
        decode_messages(bytes).map_err(|source| ReaderError::MalformedDocument {
            path: path.to_path_buf(),
            source,
        })?;

    if skipped > 0 {
        tracing::debug!(path = %path.display(), skipped, "Skipped message records without text");
    }

    Ok(ReadMessages {
        messages,
        skipped,
        end_pos: bytes.len() as u64,
    })
}

/// Decode a log document. Fails only when the top-level `Messages` array is
/// missing; individual records without a string `Message` are counted and
/// skipped.
pub fn decode_messages(bytes: &[u8]) -> Result<(Vec<RawMessage>, usize), serde_json::Error> {
    let document: LogDocument = serde_json::from_slice(bytes)?;

    let mut skipped = 0;
    let messages = document
        .messages
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let Some(text) = record.get("Message").and_then(Value::as_str) else {
                skipped += 1;
                return None;
            };
            Some(RawMessage {
                position,
                text: text.to_string(),
                timestamp: record.get("Timestamp").and_then(parse_timestamp),
            })
        })
        .collect();

    Ok((messages, skipped))
}

// RFC 3339 string or integer Unix seconds
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => DateTime::from_timestamp(n.as_i64()?, 0),
        _ => None,
    }
}
