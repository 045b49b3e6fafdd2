//! Computer opponent
//!
//! The opponent picks its cell with a fixed priority of heuristics (win,
//! block, center, corner, anything). Ties between equally good cells are
//! broken by a [`RandomSource`], which tests replace with a
//! [`ScriptedSource`] to pin the outcome.

pub mod heuristic;
pub mod random;

pub use heuristic::{CENTER, CORNERS, Decision, HeuristicOpponent, MoveRule};
pub use random::{RandomSource, ScriptedSource, SeededSource};
