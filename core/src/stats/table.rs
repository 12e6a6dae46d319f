use super::{AbilityStat, PlayerStat};
use crate::combat_log::DamageEvent;
use chrono::{DateTime, Utc};
use hashbrown::{HashMap, HashSet};
use meter_types::CapacityLimits;

/// What happened to an event handed to [`StatsTable::record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded,
    /// The player cap was reached and the actor is not tracked
    PlayerDropped,
    /// The actor's ability cap was reached; the player total still grew
    AbilityDropped,
}

/// Per-player, per-ability damage totals for one parse.
///
/// Players iterate in order of first appearance. Limits come from
/// [`CapacityLimits`]; exceeding one is logged once and counted.
#[derive(Debug, Default)]
pub struct StatsTable {
    players: Vec<PlayerStat>,
    index: HashMap<String, usize>,
    limits: CapacityLimits,
    dropped_player_events: u64,
    dropped_ability_events: u64,
    player_cap_warned: bool,
    ability_cap_warned: HashSet<usize>,
}

impl StatsTable {
    pub fn new(limits: CapacityLimits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    pub fn record(&mut self, event: &DamageEvent) -> RecordOutcome {
        self.record_at(event, None)
    }

    /// Record an event, moving the player's first/last timestamps when one
    /// is given.
    pub fn record_at(
        &mut self,
        event: &DamageEvent,
        timestamp: Option<DateTime<Utc>>,
    ) -> RecordOutcome {
        let Some(idx) = self.player_index(&event.actor) else {
            self.dropped_player_events += 1;
            return RecordOutcome::PlayerDropped;
        };

        let player = &mut self.players[idx];
        player.add_damage(event.amount, timestamp);

        if let Some(ability) = player.abilities.iter_mut().find(|a| a.name == event.ability) {
            ability.total_damage = ability.total_damage.saturating_add(event.amount);
            return RecordOutcome::Recorded;
        }

        if let Some(max) = self.limits.ability_limit()
            && player.abilities.len() >= max
        {
            self.dropped_ability_events += 1;
            if self.ability_cap_warned.insert(idx) {
                tracing::warn!(
                    player = %player.name,
                    max,
                    "Ability limit reached, further abilities for this player are not tracked"
                );
            }
            return RecordOutcome::AbilityDropped;
        }

        player.abilities.push(AbilityStat {
            name: event.ability.clone(),
            total_damage: event.amount,
        });
        RecordOutcome::Recorded
    }

    // Registers unseen players while there is room
    fn player_index(&mut self, name: &str) -> Option<usize> {
        if let Some(&idx) = self.index.get(name) {
            return Some(idx);
        }

        if let Some(max) = self.limits.player_limit()
            && self.players.len() >= max
        {
            if !self.player_cap_warned {
                self.player_cap_warned = true;
                tracing::warn!(max, player = name, "Player limit reached, new players are not tracked");
            }
            return None;
        }

        let idx = self.players.len();
        self.players.push(PlayerStat::new(name));
        self.index.insert(name.to_string(), idx);
        Some(idx)
    }

    // Accessor methods

    pub fn players(&self) -> &[PlayerStat] {
        &self.players
    }

    pub fn get(&self, name: &str) -> Option<&PlayerStat> {
        self.index.get(name).map(|&idx| &self.players[idx])
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn limits(&self) -> CapacityLimits {
        self.limits
    }

    /// Events ignored because their actor did not fit under the player cap
    pub fn dropped_player_events(&self) -> u64 {
        self.dropped_player_events
    }

    /// Events whose ability did not fit under the per-player ability cap
    pub fn dropped_ability_events(&self) -> u64 {
        self.dropped_ability_events
    }

    pub fn into_players(self) -> Vec<PlayerStat> {
        self.players
    }
}
