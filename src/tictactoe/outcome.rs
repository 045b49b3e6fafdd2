//! Outcome evaluation: completed lines, full boards

use serde::{Deserialize, Serialize};

use super::{Board, LineAnalyzer, Player};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Result of inspecting a board after a move.
///
/// `winner` and `is_draw` are never both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    pub winner: Option<Player>,
    pub is_draw: bool,
}

impl Evaluation {
    /// The game cannot continue
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match (self.winner, self.is_draw) {
            (Some(winner), _) => Some(GameOutcome::Win(winner)),
            (None, true) => Some(GameOutcome::Draw),
            (None, false) => None,
        }
    }

    /// Status line shown to the player when the game ends
    pub fn status_message(&self) -> Option<String> {
        self.outcome().map(|outcome| match outcome {
            GameOutcome::Win(winner) => format!("Player {winner} wins!"),
            GameOutcome::Draw => "Draw!".to_string(),
        })
    }
}

/// Evaluate a board.
///
/// Lines are checked in [`super::WINNING_LINES`] order and the first complete
/// one decides the winner. A full board without a complete line is a draw.
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((_, winner)) = LineAnalyzer::completed_line(&board.cells) {
        return Evaluation {
            winner: Some(winner),
            is_draw: false,
        };
    }

    Evaluation {
        winner: None,
        is_draw: board.is_full(),
    }
}
