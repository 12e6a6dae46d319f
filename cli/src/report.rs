use meter_core::{ParseResult, PlayerStat};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a Path,
    message_count: usize,
    event_count: usize,
    skipped_messages: usize,
    rejected_messages: usize,
    dropped_player_events: u64,
    dropped_ability_events: u64,
    players: &'a [PlayerStat],
}

pub fn print_report(result: &ParseResult, json: bool) {
    if json {
        print_json(result);
    } else {
        print_text(result);
    }
}

fn print_text(result: &ParseResult) {
    println!("Combat Statistics:");
    for player in result.table.players() {
        println!("\nPlayer: {}", player.name);
        println!("  Total Damage: {}", player.total_damage);
        println!("  Abilities:");
        for ability in &player.abilities {
            println!("   - {}: {} damage", ability.name, ability.total_damage);
        }
        let untracked = player.untracked_damage();
        if untracked > 0 {
            println!("   (+{untracked} damage from abilities over the tracking limit)");
        }
    }

    if result.table.is_empty() {
        println!("\nNo damage events found");
    }
    println!(
        "\nparsed {} messages ({} damage events) in {}ms",
        result.message_count, result.event_count, result.elapsed_ms
    );
}

fn print_json(result: &ParseResult) {
    let report = JsonReport {
        path: &result.path,
        message_count: result.message_count,
        event_count: result.event_count,
        skipped_messages: result.skipped_messages,
        rejected_messages: result.rejected_messages,
        dropped_player_events: result.table.dropped_player_events(),
        dropped_ability_events: result.table.dropped_ability_events(),
        players: result.table.players(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!(error = %e, "Failed to serialize report"),
    }
}
