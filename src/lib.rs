//! Tic-tac-toe against a heuristic computer player
//!
//! This crate provides:
//! - Board representation, outcome evaluation and reachable-position checks
//! - A rule-based opponent (win, block, center, corner, random)
//! - A turn controller that drives a game through render and storage ports
//! - A Q-learning table and exploration schedule persisted between runs
//! - A terminal front end (`noughts` binary)
//!
//! # Example
//!
//! ```
//! use noughts::opponent::HeuristicOpponent;
//! use noughts::tictactoe::{Board, Player};
//!
//! let board = Board::from_string("XX..O....")?;
//! let mut opponent = HeuristicOpponent::seeded(Player::O, Some(7));
//! assert_eq!(opponent.select_move(&board)?, 2);
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod controller;
pub mod error;
pub mod opponent;
pub mod persistence;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;

pub use error::{Error, Result};
