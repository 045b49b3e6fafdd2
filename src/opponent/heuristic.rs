//! Priority-rule opponent
//!
//! The rules are tried in order and the first one that applies decides:
//!
//! 1. [`MoveRule::WinNow`]: complete a line of our own
//! 2. [`MoveRule::Block`]: fill the gap in the opponent's two-in-a-row
//! 3. [`MoveRule::Center`]: take cell 4
//! 4. [`MoveRule::Corner`]: a random free corner
//! 5. [`MoveRule::Random`]: a random free cell
//!
//! Lines for rules 1 and 2 are scanned in [`WINNING_LINES`] order, so the
//! first qualifying line wins ties.
//!
//! [`WINNING_LINES`]: crate::tictactoe::WINNING_LINES

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::random::{RandomSource, SeededSource};
use crate::{
    Result,
    tictactoe::{Board, LineAnalyzer, Player},
};

/// Center cell index
pub const CENTER: usize = 4;

/// Corner cell indices
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Which heuristic produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRule {
    WinNow,
    Block,
    Center,
    Corner,
    Random,
}

impl fmt::Display for MoveRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveRule::WinNow => "win now",
            MoveRule::Block => "block",
            MoveRule::Center => "center",
            MoveRule::Corner => "corner",
            MoveRule::Random => "random",
        };
        f.write_str(name)
    }
}

/// A chosen cell together with the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub position: usize,
    pub rule: MoveRule,
}

/// Heuristic computer player
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<R = SeededSource> {
    player: Player,
    rng: R,
}

impl HeuristicOpponent<SeededSource> {
    /// Opponent playing `player` with a seeded (or entropy-seeded) source
    pub fn seeded(player: Player, seed: Option<u64>) -> Self {
        Self::new(player, SeededSource::new(seed))
    }
}

impl<R: RandomSource> HeuristicOpponent<R> {
    pub fn new(player: Player, rng: R) -> Self {
        Self { player, rng }
    }

    /// Symbol this opponent places
    pub fn player(&self) -> Player {
        self.player
    }

    /// Pick a cell for [`player`](Self::player) on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) when the
    /// board is full.
    pub fn select_move(&mut self, board: &Board) -> Result<usize> {
        Ok(self.decide(board)?.position)
    }

    /// Like [`select_move`](Self::select_move), also reporting the rule used.
    pub fn decide(&mut self, board: &Board) -> Result<Decision> {
        if board.is_full() {
            return Err(crate::Error::NoValidMoves);
        }

        let decision = self.apply_rules(board);
        debug!(
            player = %self.player,
            position = decision.position,
            rule = %decision.rule,
            "opponent chose a cell"
        );
        Ok(decision)
    }

    fn apply_rules(&mut self, board: &Board) -> Decision {
        if let Some(position) = LineAnalyzer::completing_move(&board.cells, self.player) {
            return Decision {
                position,
                rule: MoveRule::WinNow,
            };
        }

        if let Some(position) = LineAnalyzer::completing_move(&board.cells, self.player.opponent())
        {
            return Decision {
                position,
                rule: MoveRule::Block,
            };
        }

        if board.is_empty(CENTER) {
            return Decision {
                position: CENTER,
                rule: MoveRule::Center,
            };
        }

        let free_corners: Vec<usize> = CORNERS
            .iter()
            .copied()
            .filter(|&corner| board.is_empty(corner))
            .collect();
        if !free_corners.is_empty() {
            let index = self.rng.pick(free_corners.len());
            return Decision {
                position: free_corners[index],
                rule: MoveRule::Corner,
            };
        }

        // Resample until a free cell comes up; the caller guarantees one exists
        loop {
            let position = self.rng.pick(9);
            if board.is_empty(position) {
                return Decision {
                    position,
                    rule: MoveRule::Random,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ScriptedSource;

    fn opponent(picks: impl IntoIterator<Item = usize>) -> HeuristicOpponent<ScriptedSource> {
        HeuristicOpponent::new(Player::O, ScriptedSource::new(picks))
    }

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_takes_center_after_corner_opening() {
        let decision = opponent([]).decide(&board("X........")).unwrap();
        assert_eq!(
            decision,
            Decision {
                position: 4,
                rule: MoveRule::Center
            }
        );
    }

    #[test]
    fn test_blocks_top_row() {
        let decision = opponent([]).decide(&board("XX..O....")).unwrap();
        assert_eq!(
            decision,
            Decision {
                position: 2,
                rule: MoveRule::Block
            }
        );
    }

    #[test]
    fn test_win_beats_block() {
        // XX.
        // OO.
        // X..
        // O can win at 5 and must not block at 2
        let decision = opponent([]).decide(&board("XX.OO.X..")).unwrap();
        assert_eq!(
            decision,
            Decision {
                position: 5,
                rule: MoveRule::WinNow
            }
        );
    }

    #[test]
    fn test_first_declared_line_wins_ties() {
        // XX.
        // XO.
        // ..O
        // X threatens both 2 (row 0) and 6 (column 0); row 0 is declared first
        let decision = opponent([]).decide(&board("XX.XO...O")).unwrap();
        assert_eq!(
            decision,
            Decision {
                position: 2,
                rule: MoveRule::Block
            }
        );
    }

    #[test]
    fn test_corner_reply_to_center_opening_follows_source() {
        for (pick, expected) in [(0, 0), (1, 2), (2, 6), (3, 8)] {
            let decision = opponent([pick]).decide(&board("....X....")).unwrap();
            assert_eq!(decision.rule, MoveRule::Corner);
            assert_eq!(decision.position, expected);
        }
    }

    #[test]
    fn test_corner_only_among_free_corners() {
        // O..
        // .X.
        // ..X
        // Free corners are 2 and 6
        let quiet = board("O...X...X");
        let first = opponent([0]).decide(&quiet).unwrap();
        let second = opponent([1]).decide(&quiet).unwrap();

        assert_eq!(first.rule, MoveRule::Corner);
        assert_eq!(first.position, 2);
        assert_eq!(second.position, 6);
    }

    #[test]
    fn test_random_resamples_until_free() {
        // OXO
        // .X.
        // XOX
        // Center and corners taken, no threats; only 3 and 5 are free
        let quiet = board("OXO.X.XOX");
        let decision = opponent([0, 1, 3]).decide(&quiet).unwrap();
        assert_eq!(
            decision,
            Decision {
                position: 3,
                rule: MoveRule::Random
            }
        );
    }

    #[test]
    fn test_full_board_is_an_error() {
        let result = opponent([]).decide(&board("XOXXOOOXX"));
        assert!(matches!(result, Err(crate::Error::NoValidMoves)));
    }

    #[test]
    fn test_select_move_matches_decide() {
        let mut a = HeuristicOpponent::seeded(Player::O, Some(7));
        let mut b = HeuristicOpponent::seeded(Player::O, Some(7));
        let start = board("....X....");
        assert_eq!(
            a.select_move(&start).unwrap(),
            b.decide(&start).unwrap().position
        );
        assert!(CORNERS.contains(&a.select_move(&start).unwrap()));
    }
}
