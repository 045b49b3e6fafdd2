//! Play command - a game against the heuristic opponent on the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::TerminalSurface,
    app::{App, GameConfig},
    cli::DEFAULT_DATA_FILE,
    controller::{TurnController, TurnReport},
    opponent::RandomSource,
    ports::KeyValueStore,
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// File holding the learning table and game counter
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Update the learning table from each finished game
    #[arg(long)]
    pub reward_updates: bool,
}

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Cell(usize),
    Restart,
    Help,
    Quit,
}

impl Input {
    pub fn parse(line: &str) -> Option<Input> {
        let token = line.trim().to_ascii_lowercase();
        match token.as_str() {
            "r" | "restart" | "new" => Some(Input::Restart),
            "h" | "help" | "?" => Some(Input::Help),
            "q" | "quit" | "exit" => Some(Input::Quit),
            _ => token.parse().ok().map(Input::Cell),
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let app = App::new(&args.data);

    let mut controller = app
        .create_controller(TerminalSurface::new(io::stdout()), &config)
        .context("Failed to set up the game")?;

    println!(
        "Games started so far: {}. You are X.",
        controller.total_games()
    );
    print_help();
    controller.surface_mut().draw()?;

    let stdin = io::stdin();
    run(stdin.lock(), &mut controller)
}

/// Merge the config file (if any) with command-line overrides.
fn resolve_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::new(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.reward_updates {
        config.learning.reward_updates = true;
    }
    config.validate()?;
    Ok(config)
}

/// Read commands until `quit` or end of input.
pub fn run<B, S, W, R>(
    input: B,
    controller: &mut TurnController<S, TerminalSurface<W>, R>,
) -> Result<()>
where
    B: BufRead,
    S: KeyValueStore,
    W: Write,
    R: RandomSource,
{
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match Input::parse(&line) {
            Some(Input::Cell(position)) => {
                let report = controller.handle_cell(position)?;
                if let TurnReport::Ignored = report {
                    if controller.session().is_active() {
                        println!("Cell {position} is not available.");
                    } else {
                        println!("The game is over. Type 'r' to play again.");
                    }
                }
            }
            Some(Input::Restart) => controller.restart()?,
            Some(Input::Help) => print_help(),
            Some(Input::Quit) => break,
            None => println!("Unrecognized input '{}'. Type 'h' for help.", line.trim()),
        }
    }
    Ok(())
}

fn print_help() {
    println!("Enter a cell number 0-8 to play, 'r' to restart, 'q' to quit.");
}
