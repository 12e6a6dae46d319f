use crate::CliContext;
use crate::repl::prompt;
use crate::report::print_report;
use meter_core::context::{AppConfigExt, parse_file, resolve_log_path};
use meter_core::{AppConfig, Selection, select};
use std::io::Write;
use std::path::Path;

pub fn parse_path(path: &Path, ctx: &CliContext, json: bool) {
    match parse_file(path, &ctx.config) {
        Ok(result) => print_report(&result, json),
        Err(e) => println!("{e}"),
    }
}

pub fn parse_latest(ctx: &CliContext, json: bool) {
    match ctx.latest() {
        Some(latest) => parse_path(&latest.path, ctx, json),
        None => println!("No combat log named '{}' found", ctx.config.log_file_name),
    }
}

pub fn parse_file_arg(path: &str, ctx: &CliContext, json: bool) {
    let resolved = resolve_log_path(&ctx.config, Path::new(path));
    parse_path(&resolved, ctx, json);
}

pub fn list_files(ctx: &CliContext) {
    if ctx.ranked.is_empty() {
        println!("No combat log named '{}' found", ctx.config.log_file_name);
        return;
    }

    println!("Combat log files (newest first):");
    for (i, candidate) in ctx.ranked.iter().enumerate() {
        println!(
            "{}. {} (Last Modified: {})",
            i + 1,
            candidate.path.display(),
            candidate.formatted_modified()
        );
    }

    if let Some(d) = &ctx.discovery
        && d.skipped > 0
    {
        println!("({} more not listed, limit is {})", d.skipped, ctx.config.max_files);
    }
}

/// Parse the file at a 1-based position of the ranked list. Without an
/// index, list the files and ask for one.
pub fn select_file(index: Option<usize>, ctx: &CliContext, json: bool) -> Result<(), String> {
    if ctx.ranked.is_empty() {
        println!("No combat log named '{}' found", ctx.config.log_file_name);
        return Ok(());
    }

    let index = match index {
        Some(i) => i,
        None => {
            list_files(ctx);
            let answer = prompt("\nEnter the number of the file to parse (or 0 to cancel): ")?;
            answer.trim().parse().unwrap_or(0)
        }
    };

    match select(&ctx.ranked, index) {
        Selection::Chosen(candidate) => parse_path(&candidate.path, ctx, json),
        Selection::Cancelled => println!("File selection canceled"),
    }
    Ok(())
}

pub fn rescan(ctx: &mut CliContext) {
    ctx.rescan();
    list_files(ctx);
}

pub fn set_directory(new_directory: &str, ctx: &mut CliContext) {
    let dir = Path::new(new_directory);
    if !dir.is_dir() {
        println!("Update failed. Invalid directory name given.");
        return;
    }
    if new_directory == ctx.config.log_directory {
        println!("Log directory already configured to {new_directory}");
        return;
    }

    ctx.config.log_directory = new_directory.to_string();
    if let Err(e) = ctx.config.save() {
        println!("{e}");
    }
    ctx.rescan();
}

pub fn show_settings(ctx: &CliContext) {
    let config: &AppConfig = &ctx.config;
    if let Ok(path) = AppConfig::config_path() {
        println!("Config file:     {}", path.display());
    }
    println!("Log directory:   {}", config.log_directory);
    println!("Log file name:   {}", config.log_file_name);
    println!("Max files:       {}", config.max_files);
    println!("Max name length: {} ({:?})", config.max_name_len, config.truncation);
    if config.limits.unbounded {
        println!("Limits:          unbounded");
    } else {
        println!(
            "Limits:          {} players, {} abilities per player",
            config.limits.max_players, config.limits.max_abilities
        );
    }
}

pub fn exit() -> Result<(), String> {
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}
