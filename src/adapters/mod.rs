//! Adapters implementing domain ports.
//!
//! Stores implement [`KeyValueStore`](crate::ports::KeyValueStore); surfaces
//! implement [`RenderSurface`](crate::ports::RenderSurface).

pub mod in_memory_store;
pub mod json_file_store;
pub mod recording_surface;
pub mod terminal_surface;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
pub use recording_surface::{RecordingSurface, RenderEvent};
pub use terminal_surface::TerminalSurface;
