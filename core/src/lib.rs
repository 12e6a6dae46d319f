pub mod combat_log;
pub mod context;
pub mod ranking;
pub mod stats;

// Re-exports for convenience
pub use combat_log::*;
pub use context::{AppConfig, AppConfigExt, ParseResult, ParsingSession, parse_file};
pub use ranking::{FileCandidate, LatestTracker, Selection, latest, rank, select};
pub use stats::{AbilityStat, PlayerStat, RecordOutcome, StatsTable};
