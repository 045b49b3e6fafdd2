//! CLI infrastructure for the noughts game
//!
//! This module provides the command-line interface for playing against the
//! heuristic opponent, asking it for a move, and inspecting saved progress.

pub mod commands;
pub mod output;

/// Data file used when `--data` is not given
pub const DEFAULT_DATA_FILE: &str = "noughts-data.json";
