//! Tic-Tac-Toe board, outcome evaluation and game session

pub mod board;
pub mod game;
pub mod lines;
pub mod outcome;
pub mod validation;

pub use board::{Board, Cell, Player};
pub use game::{GameSession, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Evaluation, GameOutcome, evaluate};
pub use validation::reachable_boards;
