//! Ports (trait boundaries) for external collaborators.
//!
//! The game core reports results through [`RenderSurface`] and keeps its
//! learning table and play counter in a [`KeyValueStore`]. Both are owned
//! by the domain and implemented by adapters.

pub mod render;
pub mod store;

pub use render::RenderSurface;
pub use store::{KeyValueStore, TABLE_KEY, TOTAL_GAMES_KEY};
