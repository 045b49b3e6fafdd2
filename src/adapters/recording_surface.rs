//! Render surface that records every event, for tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Result, ports::RenderSurface, tictactoe::Player};

/// One call made on a [`RenderSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Cell { position: usize, player: Player },
    Status(String),
    Reset,
}

/// Surface that keeps a log of render calls.
///
/// Clones share the same log, so a test can hand one clone to a controller
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<RenderEvent> {
        self.lock().clone()
    }

    /// Status messages in the order they were shown
    pub fn statuses(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Status(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<String> {
        self.statuses().pop()
    }

    /// Drain the log, returning what was recorded
    pub fn take(&self) -> Vec<RenderEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RenderEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderSurface for RecordingSurface {
    fn show_cell(&mut self, position: usize, player: Player) -> Result<()> {
        self.lock().push(RenderEvent::Cell { position, player });
        Ok(())
    }

    fn show_status(&mut self, message: &str) -> Result<()> {
        self.lock().push(RenderEvent::Status(message.to_string()));
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.lock().push(RenderEvent::Reset);
        Ok(())
    }
}
