//! Configuration types for game creation.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::Error,
    q_learning::{ExplorationSchedule, LearningParams},
};

/// Configuration for creating a turn controller.
///
/// Every field has a default, so a config file only needs to name what it
/// changes.
///
/// # Examples
///
/// ```
/// use noughts::app::{GameConfig, LearningConfig};
///
/// let config = GameConfig::new()
///     .with_seed(42)
///     .with_learning(LearningConfig::default().with_reward_updates(true));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Random seed for the opponent (None = non-deterministic)
    pub seed: Option<u64>,
    /// Learning-table parameters
    pub learning: LearningConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_learning(mut self, learning: LearningConfig) -> Self {
        self.learning = learning;
        self
    }

    /// Load a JSON config file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not valid JSON, or holds
    /// values rejected by [`validate`](Self::validate).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&content).map_err(|e| Error::SerializationContext {
                operation: format!("parse config file {path:?}"),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        self.learning.validate()
    }
}

/// Parameters of the learning table and its exploration schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub initial_exploration: f64,
    pub exploration_step: f64,
    pub min_exploration: f64,
    /// Update the table from each finished game
    pub reward_updates: bool,
}

impl Default for LearningConfig {
    fn default() -> Self {
        let params = LearningParams::default();
        let schedule = ExplorationSchedule::default();
        Self {
            learning_rate: params.learning_rate,
            discount_factor: params.discount_factor,
            initial_exploration: schedule.initial,
            exploration_step: schedule.step,
            min_exploration: schedule.floor,
            reward_updates: false,
        }
    }
}

impl LearningConfig {
    pub fn with_reward_updates(mut self, enabled: bool) -> Self {
        self.reward_updates = enabled;
        self
    }

    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn params(&self) -> LearningParams {
        LearningParams {
            learning_rate: self.learning_rate,
            discount_factor: self.discount_factor,
        }
    }

    pub fn schedule(&self) -> ExplorationSchedule {
        ExplorationSchedule {
            initial: self.initial_exploration,
            step: self.exploration_step,
            floor: self.min_exploration,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let unit_range = [
            ("learning_rate", self.learning_rate),
            ("discount_factor", self.discount_factor),
            ("initial_exploration", self.initial_exploration),
            ("exploration_step", self.exploration_step),
            ("min_exploration", self.min_exploration),
        ];
        for (name, value) in unit_range {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }

        if self.min_exploration > self.initial_exploration {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "min_exploration ({}) exceeds initial_exploration ({})",
                    self.min_exploration, self.initial_exploration
                ),
            });
        }

        Ok(())
    }
}
