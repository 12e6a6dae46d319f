use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityStat {
    pub name: String,
    pub total_damage: u64,
}

/// Accumulated damage for one actor. Abilities are kept in the order they
/// were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStat {
    pub name: String,
    pub total_damage: u64,
    pub abilities: Vec<AbilityStat>,
    pub first_timestamp: Option<DateTime<Utc>>,
    pub last_timestamp: Option<DateTime<Utc>>,
}

impl PlayerStat {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_damage: 0,
            abilities: Vec::new(),
            first_timestamp: None,
            last_timestamp: None,
        }
    }

    pub fn ability(&self, name: &str) -> Option<&AbilityStat> {
        self.abilities.iter().find(|a| a.name == name)
    }

    /// Sum of the per-ability totals
    pub fn tracked_damage(&self) -> u64 {
        self.abilities
            .iter()
            .fold(0u64, |acc, a| acc.saturating_add(a.total_damage))
    }

    /// Damage counted in `total_damage` but not attributed to any tracked
    /// ability. Non-zero only after the ability cap was hit.
    pub fn untracked_damage(&self) -> u64 {
        self.total_damage.saturating_sub(self.tracked_damage())
    }

    pub(super) fn add_damage(&mut self, amount: u64, timestamp: Option<DateTime<Utc>>) {
        self.total_damage = self.total_damage.saturating_add(amount);
        if let Some(ts) = timestamp {
            self.first_timestamp.get_or_insert(ts);
            self.last_timestamp = Some(ts);
        }
    }
}
