//! Q-table keyed by board encoding

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, GameOutcome, Move, Player};

/// Number of actions per state (one per cell)
pub const ACTIONS: usize = 9;

/// Step size and discount for [`QTable::update`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningParams {
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount_factor: f64,
}

impl Default for LearningParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
        }
    }
}

/// Map from board encoding to one value per cell.
///
/// Serializes as a JSON object of 9-element arrays, e.g.
/// `{".........": [0.0, 0.0, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QTable {
    values: BTreeMap<String, [f64; ACTIONS]>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a zeroed row for `state` if absent. Returns true when inserted.
    pub fn ensure_state(&mut self, state: &str) -> bool {
        if self.values.contains_key(state) {
            return false;
        }
        self.values.insert(state.to_string(), [0.0; ACTIONS]);
        true
    }

    /// Row for a state, if it has been seen
    pub fn row(&self, state: &str) -> Option<&[f64; ACTIONS]> {
        self.values.get(state)
    }

    /// Value of an action, zero for unseen states
    pub fn get(&self, state: &str, action: usize) -> f64 {
        self.values
            .get(state)
            .and_then(|row| row.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Maximum value over all actions of a state (zero for unseen states)
    pub fn max_q(&self, state: &str) -> f64 {
        self.values
            .get(state)
            .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .unwrap_or(0.0)
    }

    /// Q-learning update
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Both rows are initialized first. Actions outside 0..9 are ignored.
    pub fn update(
        &mut self,
        state: &str,
        action: usize,
        reward: f64,
        next_state: &str,
        params: &LearningParams,
    ) {
        if action >= ACTIONS {
            return;
        }
        self.ensure_state(state);
        self.ensure_state(next_state);

        let max_next_q = self.max_q(next_state);
        if let Some(row) = self.values.get_mut(state) {
            let current_q = row[action];
            let td_target = reward + params.discount_factor * max_next_q;
            row[action] = current_q + params.learning_rate * (td_target - current_q);
        }
    }

    /// Replay a finished game and update every move made by `role`.
    ///
    /// The last move of `role` receives +1 for a win, -1 for a loss and 0.5
    /// for a draw; earlier moves receive 0. Each update bootstraps from the
    /// board right after the move.
    pub fn learn_episode(
        &mut self,
        moves: &[Move],
        outcome: GameOutcome,
        role: Player,
        params: &LearningParams,
    ) -> Result<(), crate::Error> {
        let final_reward = match outcome {
            GameOutcome::Win(winner) if winner == role => 1.0,
            GameOutcome::Win(_) => -1.0,
            GameOutcome::Draw => 0.5,
        };
        let last_own = moves.iter().rposition(|m| m.player == role);

        let mut board = Board::new();
        for (i, mv) in moves.iter().enumerate() {
            let before = board.encode();
            board.place(mv.position, mv.player)?;

            if mv.player == role {
                let reward = if Some(i) == last_own {
                    final_reward
                } else {
                    0.0
                };
                self.update(&before, mv.position, reward, &board.encode(), params);
            }
        }

        Ok(())
    }

    /// Number of states stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = ".........";

    #[test]
    fn test_ensure_state_initializes_once() {
        let mut table = QTable::new();
        assert!(table.ensure_state(EMPTY));
        assert!(!table.ensure_state(EMPTY));
        assert_eq!(table.len(), 1);
        assert_eq!(table.row(EMPTY), Some(&[0.0; ACTIONS]));
    }

    #[test]
    fn test_unseen_state_is_zero() {
        let table = QTable::new();
        assert_eq!(table.get(EMPTY, 4), 0.0);
        assert_eq!(table.max_q(EMPTY), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_update_bootstraps_from_next_state() {
        let mut table = QTable::new();
        let params = LearningParams::default();
        let next = "X........";

        // Seed next state with a known maximum
        let overwrite = LearningParams {
            learning_rate: 1.0,
            discount_factor: 0.0,
        };
        table.update(next, 1, 2.0, "XO.......", &overwrite);
        assert_eq!(table.max_q(next), 2.0);

        table.update(EMPTY, 0, 0.0, next, &params);
        // 0 + 0.1 * (0 + 0.9 * 2.0 - 0) = 0.18
        assert!((table.get(EMPTY, 0) - 0.18).abs() < 1e-12);
    }

    #[test]
    fn test_update_ignores_out_of_range_action() {
        let mut table = QTable::new();
        table.update(EMPTY, 9, 1.0, "X........", &LearningParams::default());
        assert!(table.is_empty());
    }

    #[test]
    fn test_learn_episode_rewards_last_move() {
        let mut table = QTable::new();
        let params = LearningParams::default();
        let moves: Vec<Move> = [
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
        ]
        .into_iter()
        .map(|(position, player)| Move { position, player })
        .collect();

        table
            .learn_episode(&moves, GameOutcome::Win(Player::X), Player::O, &params)
            .unwrap();

        // O's final move: 4, played on XX.O.....
        assert!((table.get("XX.O.....", 4) - (-0.1)).abs() < 1e-12);
        assert_eq!(table.get("X........", 3), 0.0);
    }

    #[test]
    fn test_learn_episode_rejects_corrupt_history() {
        let mut table = QTable::new();
        let moves = [
            Move {
                position: 0,
                player: Player::X,
            },
            Move {
                position: 0,
                player: Player::O,
            },
        ];
        let result = table.learn_episode(
            &moves,
            GameOutcome::Draw,
            Player::O,
            &LearningParams::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_json_shape() {
        let mut table = QTable::new();
        table.ensure_state(EMPTY);
        let json = table.to_json().unwrap();
        assert_eq!(json, r#"{".........":[0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0]}"#);

        let parsed = QTable::from_json(&json).unwrap();
        assert_eq!(parsed, table);
        assert!(QTable::from_json("not json").is_err());
    }
}
