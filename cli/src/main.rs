use clap::{Parser, Subcommand};
use meter_cli::{CliContext, commands, logging, readline};
use meter_core::{AppConfig, AppConfigExt};
use std::io::Write;

fn main() -> Result<(), String> {
    logging::init();

    let mut ctx = CliContext::new(AppConfig::load());
    ctx.rescan();
    print_menu();

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\nCommands:");
    println!("  latest (1)       parse the most recently modified combat log");
    println!("  select (2) [-i]  pick a combat log from the list");
    println!("  exit (3)");
    println!("  list | rescan | parse-file -p <path> | set-directory -p <dir> | config | help");
}

#[derive(Parser)]
#[command(version, about = "Pantheon combat meter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the most recently modified combat log
    #[command(alias = "1")]
    Latest {
        #[arg(long)]
        json: bool,
    },
    /// Parse a combat log chosen from the ranked list
    #[command(alias = "2")]
    Select {
        #[arg(short, long)]
        index: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    #[command(alias = "3")]
    Exit,
    ParseFile {
        #[arg(short, long)]
        path: String,
        #[arg(long)]
        json: bool,
    },
    #[command(alias = "list")]
    ListFiles,
    Rescan,
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
    Config,
    Menu,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "pantheon-meter".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Latest { json }) => commands::parse_latest(ctx, *json),
        Some(Commands::Select { index, json }) => commands::select_file(*index, ctx, *json)?,
        Some(Commands::ParseFile { path, json }) => commands::parse_file_arg(path, ctx, *json),
        Some(Commands::ListFiles) => commands::list_files(ctx),
        Some(Commands::Rescan) => commands::rescan(ctx),
        Some(Commands::SetDirectory { path }) => commands::set_directory(path, ctx),
        Some(Commands::Config) => commands::show_settings(ctx),
        Some(Commands::Menu) => print_menu(),
        Some(Commands::Exit) => {
            commands::exit()?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
