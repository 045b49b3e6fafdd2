//! noughts CLI - tic-tac-toe against a heuristic computer player
//!
//! Subcommands:
//! - `play`: interactive game on the terminal, progress saved to a JSON file
//! - `suggest`: the computer's move for a given board
//! - `stats`: saved game counter and learning-table size

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against a heuristic opponent", long_about = None)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Show the computer's move for a board
    Suggest(noughts::cli::commands::suggest::SuggestArgs),

    /// Show or reset saved progress
    Stats(noughts::cli::commands::stats::StatsArgs),
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "noughts=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Suggest(args) => noughts::cli::commands::suggest::execute(args),
        Commands::Stats(args) => noughts::cli::commands::stats::execute(args),
    }
}
