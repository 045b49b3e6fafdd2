//! Exploration-rate schedule

use serde::{Deserialize, Serialize};

/// Linear decay of the exploration rate, one step per finished game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplorationSchedule {
    pub initial: f64,
    pub step: f64,
    pub floor: f64,
}

impl Default for ExplorationSchedule {
    fn default() -> Self {
        Self {
            initial: 0.5,
            step: 0.01,
            floor: 0.1,
        }
    }
}

impl ExplorationSchedule {
    /// Rate after one more game
    pub fn decay(&self, rate: f64) -> f64 {
        (rate - self.step).max(self.floor)
    }

    /// Rate after `games` restarts from the initial value
    pub fn rate_after(&self, games: u64) -> f64 {
        (self.initial - self.step * games as f64).max(self.floor)
    }
}
