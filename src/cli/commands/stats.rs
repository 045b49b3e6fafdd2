//! Stats command - show or reset saved progress

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, GameConfig, LearningConfig},
    cli::{
        DEFAULT_DATA_FILE,
        output::{format_number, print_kv, print_section},
    },
    persistence::Progress,
};

#[derive(Parser, Debug)]
#[command(about = "Show saved progress")]
pub struct StatsArgs {
    /// File holding the learning table and game counter
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// JSON configuration file; its exploration schedule sets the reported rate
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Delete the saved table and counter
    #[arg(long)]
    pub reset: bool,
}

/// Summary printed by the command
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_games: u64,
    pub states: usize,
    pub exploration_rate: f64,
}

impl StatsSummary {
    pub fn from_progress(progress: &Progress, learning: &LearningConfig) -> Self {
        Self {
            total_games: progress.total_games,
            states: progress.table.len(),
            exploration_rate: learning.schedule().rate_after(progress.total_games),
        }
    }
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let app = App::new(&args.data);

    if args.reset {
        app.reset_progress()
            .with_context(|| format!("Failed to reset {}", args.data.display()))?;
        println!("Cleared saved progress in {}", args.data.display());
        return Ok(());
    }

    let learning = learning_config(args.config.as_deref())?;
    let summary = StatsSummary::from_progress(&app.progress(), &learning);

    print_section("Saved progress");
    print_kv("Data file", &args.data.display().to_string());
    print_kv("Games started", &format_number(summary.total_games));
    print_kv("Table states", &format_number(summary.states as u64));
    print_kv(
        "Exploration rate",
        &format!("{:.2}", summary.exploration_rate),
    );
    Ok(())
}

/// Learning settings from the config file, or the defaults.
fn learning_config(path: Option<&Path>) -> Result<LearningConfig> {
    match path {
        Some(path) => Ok(GameConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
            .learning),
        None => Ok(LearningConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::q_learning::QTable;

    #[test]
    fn test_summary_from_progress() {
        let mut table = QTable::new();
        table.ensure_state(".........");
        table.ensure_state("X........");
        let progress = Progress {
            table,
            total_games: 45,
        };

        let summary = StatsSummary::from_progress(&progress, &LearningConfig::default());
        assert_eq!(summary.total_games, 45);
        assert_eq!(summary.states, 2);
        assert!((summary.exploration_rate - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_summary_uses_configured_schedule() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"learning": {"initial_exploration": 0.9, "exploration_step": 0.02}}"#,
        )
        .unwrap();

        let progress = Progress {
            table: QTable::new(),
            total_games: 10,
        };
        let configured = learning_config(Some(&path)).unwrap();
        let summary = StatsSummary::from_progress(&progress, &configured);
        assert!((summary.exploration_rate - 0.7).abs() < 1e-12);

        let default = learning_config(None).unwrap();
        let summary = StatsSummary::from_progress(&progress, &default);
        assert!((summary.exploration_rate - 0.4).abs() < 1e-12);

        assert!(learning_config(Some(&temp_dir.path().join("missing.json"))).is_err());
    }
}
