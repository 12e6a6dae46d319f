//! Aggregation behaviour of the stats table

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use meter_types::CapacityLimits;
use proptest::prelude::*;

use super::{RecordOutcome, StatsTable};
use crate::combat_log::DamageEvent;

fn event(actor: &str, ability: &str, amount: u64) -> DamageEvent {
    DamageEvent {
        actor: actor.to_string(),
        ability: ability.to_string(),
        amount,
    }
}

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn limits(max_players: usize, max_abilities: usize) -> CapacityLimits {
    CapacityLimits {
        max_players,
        max_abilities,
        unbounded: false,
    }
}

#[test]
fn test_record_first_event_registers_player() {
    let mut table = StatsTable::default();
    let outcome = table.record(&event("Bob", "Fireball", 120));

    assert_eq!(outcome, RecordOutcome::Recorded);
    assert_eq!(table.len(), 1);

    let bob = table.get("Bob").unwrap();
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.total_damage, 120);
    assert_eq!(bob.abilities.len(), 1);
    assert_eq!(bob.abilities[0].name, "Fireball");
    assert_eq!(bob.abilities[0].total_damage, 120);
}

#[test]
fn test_record_same_ability_updates_in_place() {
    let mut table = StatsTable::default();
    table.record(&event("Bob", "Fireball", 30));
    table.record(&event("Bob", "Frostbolt", 5));
    table.record(&event("Bob", "Fireball", 12));

    let bob = table.get("Bob").unwrap();
    let names: Vec<_> = bob.abilities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Fireball", "Frostbolt"]);
    assert_eq!(bob.abilities[0].total_damage, 42);
    assert_eq!(bob.total_damage, 47);
    assert_eq!(bob.tracked_damage(), bob.total_damage);
}

#[test]
fn test_record_players_keep_first_appearance_order() {
    let mut table = StatsTable::default();
    table.record(&event("Cid", "Kick", 1));
    table.record(&event("Ann", "Jab", 1));
    table.record(&event("Cid", "Kick", 1));
    table.record(&event("Bob", "Zap", 1));

    let names: Vec<_> = table.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Cid", "Ann", "Bob"]);
}

#[test]
fn test_record_names_match_exactly() {
    let mut table = StatsTable::default();
    table.record(&event("bob", "Zap", 1));
    table.record(&event("Bob", "Zap", 1));
    table.record(&event("Bob ", "zap", 1));

    assert_eq!(table.len(), 3);
}

#[test]
fn test_record_zero_amount_still_registers() {
    let mut table = StatsTable::default();
    table.record(&event("Alice", "Slash", 0));

    let alice = table.get("Alice").unwrap();
    assert_eq!(alice.total_damage, 0);
    assert_eq!(alice.ability("Slash").unwrap().total_damage, 0);
}

#[test]
fn test_record_player_cap_drops_new_players() {
    let mut table = StatsTable::new(limits(2, 50));
    table.record(&event("Ann", "Jab", 1));
    table.record(&event("Bob", "Jab", 1));

    assert_eq!(
        table.record(&event("Cid", "Jab", 100)),
        RecordOutcome::PlayerDropped
    );
    assert_eq!(
        table.record(&event("Dee", "Jab", 100)),
        RecordOutcome::PlayerDropped
    );
    // tracked players keep accumulating
    assert_eq!(table.record(&event("Ann", "Jab", 4)), RecordOutcome::Recorded);

    assert_eq!(table.len(), 2);
    assert!(table.get("Cid").is_none());
    assert_eq!(table.get("Ann").unwrap().total_damage, 5);
    assert_eq!(table.dropped_player_events(), 2);
}

#[test]
fn test_record_ability_cap_keeps_player_total() {
    let mut table = StatsTable::new(limits(50, 2));
    table.record(&event("Bob", "Zap", 10));
    table.record(&event("Bob", "Kick", 20));

    assert_eq!(
        table.record(&event("Bob", "Slam", 300)),
        RecordOutcome::AbilityDropped
    );
    // existing abilities still update
    assert_eq!(table.record(&event("Bob", "Zap", 1)), RecordOutcome::Recorded);

    let bob = table.get("Bob").unwrap();
    assert_eq!(bob.abilities.len(), 2);
    assert!(bob.ability("Slam").is_none());
    assert_eq!(bob.total_damage, 331);
    assert_eq!(bob.tracked_damage(), 31);
    assert_eq!(bob.untracked_damage(), 300);
    assert_eq!(table.dropped_ability_events(), 1);
}

#[test]
fn test_record_ability_cap_is_per_player() {
    let mut table = StatsTable::new(limits(50, 1));
    table.record(&event("Ann", "Jab", 1));
    table.record(&event("Ann", "Kick", 1));
    table.record(&event("Bob", "Kick", 1));

    assert_eq!(table.get("Bob").unwrap().abilities.len(), 1);
    assert_eq!(table.get("Bob").unwrap().abilities[0].name, "Kick");
}

#[test]
fn test_record_unbounded_ignores_caps() {
    let mut table = StatsTable::new(CapacityLimits {
        max_players: 1,
        max_abilities: 1,
        unbounded: true,
    });
    for i in 0..75 {
        table.record(&event(&format!("P{i}"), &format!("A{i}"), 1));
        table.record(&event("P0", &format!("A{i}"), 1));
    }

    assert_eq!(table.len(), 75);
    assert_eq!(table.get("P0").unwrap().abilities.len(), 75);
    assert_eq!(table.dropped_player_events(), 0);
    assert_eq!(table.dropped_ability_events(), 0);
}

#[test]
fn test_record_default_limits_match_legacy() {
    let mut table = StatsTable::default();
    for i in 0..60 {
        table.record(&event(&format!("P{i}"), "Zap", 1));
    }
    assert_eq!(table.len(), 50);
    assert_eq!(table.dropped_player_events(), 10);
}

#[test]
fn test_record_at_tracks_first_and_last_timestamps() {
    let mut table = StatsTable::default();
    table.record(&event("Bob", "Zap", 1));
    assert_eq!(table.get("Bob").unwrap().first_timestamp, None);

    table.record_at(&event("Bob", "Zap", 1), Some(ts(100)));
    table.record_at(&event("Bob", "Zap", 1), None);
    table.record_at(&event("Bob", "Kick", 1), Some(ts(250)));

    let bob = table.get("Bob").unwrap();
    assert_eq!(bob.first_timestamp, Some(ts(100)));
    assert_eq!(bob.last_timestamp, Some(ts(250)));
}

#[test]
fn test_record_dropped_player_leaves_no_timestamps() {
    let mut table = StatsTable::new(limits(0, 50));
    table.record_at(&event("Bob", "Zap", 1), Some(ts(5)));
    assert!(table.is_empty());
}

fn totals(table: &StatsTable) -> (BTreeMap<String, u64>, BTreeMap<(String, String), u64>) {
    let mut players = BTreeMap::new();
    let mut abilities = BTreeMap::new();
    for p in table.players() {
        players.insert(p.name.clone(), p.total_damage);
        for a in &p.abilities {
            abilities.insert((p.name.clone(), a.name.clone()), a.total_damage);
        }
    }
    (players, abilities)
}

fn arb_events() -> impl Strategy<Value = Vec<DamageEvent>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Ann", "Bob", "Cid", "Unknown"]),
            prop::sample::select(vec!["Zap", "Kick", "Fireball", "Unknown"]),
            0u64..10_000,
        ),
        0..64,
    )
    .prop_map(|v| {
        v.into_iter()
            .map(|(actor, ability, amount)| event(actor, ability, amount))
            .collect()
    })
}

proptest! {
    #[test]
    fn totals_do_not_depend_on_event_order(
        (events, shuffled) in arb_events().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let mut a = StatsTable::default();
        let mut b = StatsTable::default();
        for e in &events {
            a.record(e);
        }
        for e in &shuffled {
            b.record(e);
        }
        prop_assert_eq!(totals(&a), totals(&b));
    }

    #[test]
    fn player_total_equals_ability_sum_below_cap(events in arb_events()) {
        let mut table = StatsTable::default();
        for e in &events {
            table.record(e);
        }
        for p in table.players() {
            prop_assert_eq!(p.total_damage, p.tracked_damage());
        }
    }
}
