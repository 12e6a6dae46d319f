//! Damage aggregation
//!
//! A [`StatsTable`] is built fresh for every parse and never merged with a
//! previous one.

mod player;
mod table;

#[cfg(test)]
mod table_tests;

pub use player::{AbilityStat, PlayerStat};
pub use table::{RecordOutcome, StatsTable};
