//! Development tasks for the tactics workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Los, Path, Reach, Render};

/// Development tasks for the tactics workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Map inspection and pathfinding queries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Draw a map as glyphs, optionally with a path overlay
    Render(Render),

    /// Find the cheapest path between two cells
    Path(Path),

    /// List the cells reachable within a movement budget
    Reach(Reach),

    /// Check line of sight between two cells
    Los(Los),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TACTICS_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render(cmd) => cmd.execute(),
        Command::Path(cmd) => cmd.execute(),
        Command::Reach(cmd) => cmd.execute(),
        Command::Los(cmd) => cmd.execute(),
    }
}
