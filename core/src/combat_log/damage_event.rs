use chrono::{DateTime, Utc};
use serde::Serialize;

/// Placeholder for an actor or ability the message grammar did not reveal.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DamageEvent {
    pub actor: String,
    pub ability: String,
    pub amount: u64,
}

/// One `Message` record from the log, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub position: usize,
    pub text: String,
    pub timestamp: Option<DateTime<Utc>>,
}
