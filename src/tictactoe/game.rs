//! Game session: board, player to move, active flag and history

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    outcome::{Evaluation, GameOutcome, evaluate},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// One game from first move to restart.
///
/// The session becomes inactive as soon as a line is completed or the board
/// fills up. While inactive it refuses further moves until [`reset`] is
/// called.
///
/// [`reset`]: GameSession::reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    active: bool,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Fresh game, X to move
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            to_move: Player::X,
            active: true,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Resume from an arbitrary position.
    ///
    /// The player to move is inferred from piece counts. A finished position
    /// yields an inactive session whose `to_move` is the player who moved
    /// last, matching what [`play`](Self::play) leaves behind.
    pub fn from_board(board: Board) -> Result<Self, crate::Error> {
        let next = board.next_player()?;
        let evaluation = evaluate(&board);
        let outcome = evaluation.outcome();

        let to_move = if outcome.is_some() && board.occupied_count() > 0 {
            next.opponent()
        } else {
            next
        };

        Ok(GameSession {
            board,
            to_move,
            active: outcome.is_none(),
            moves: Vec::new(),
            outcome,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Moves played since the session started or was reset
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Place the current player's symbol and evaluate the result.
    ///
    /// On a win or draw the session goes inactive and the turn stays with the
    /// player who just moved; otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`](crate::Error::GameOver) when the session is inactive
    /// - [`Error::InvalidPosition`](crate::Error::InvalidPosition) /
    ///   [`Error::InvalidMove`](crate::Error::InvalidMove) for bad cells
    pub fn play(&mut self, position: usize) -> Result<Evaluation, crate::Error> {
        if !self.active {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move;
        self.board.place(position, player)?;
        self.moves.push(Move { position, player });

        let evaluation = evaluate(&self.board);
        if let Some(outcome) = evaluation.outcome() {
            self.active = false;
            self.outcome = Some(outcome);
        } else {
            self.to_move = player.opponent();
        }

        Ok(evaluation)
    }

    /// Would `play(position)` be accepted
    pub fn accepts(&self, position: usize) -> bool {
        self.active && position < 9 && self.board.is_empty(position)
    }

    /// Empty board, X to move, active again
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
