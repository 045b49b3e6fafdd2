//! Q-learning scaffolding kept alongside the heuristic opponent
//!
//! The table grows one zeroed row per board the opponent faces and is
//! persisted after every opponent move. It never influences move
//! selection. Reward updates are available through
//! [`QTable::learn_episode`] and are only applied at game end when
//! [`LearningConfig::reward_updates`](crate::app::LearningConfig) is set.
//!
//! ## Update rule
//!
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//!
//! with α = 0.1 and γ = 0.9 unless configured otherwise.

pub mod exploration;
pub mod q_table;

pub use exploration::ExplorationSchedule;
pub use q_table::{LearningParams, QTable};
