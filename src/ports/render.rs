//! Render port - where moves and status messages are shown
//!
//! The turn controller only reports decisions it has already made; a
//! surface never influences the game.

use crate::{Result, tictactoe::Player};

/// Display surface for a single game.
///
/// # Event Sequence
///
/// For each accepted human move the controller calls:
/// 1. `show_cell` for the human's symbol
/// 2. `show_status` if that move ended the game
/// 3. `show_cell` for the opponent's reply, if the game is still active
/// 4. `show_status` if the reply ended the game
///
/// `reset` is called on restart.
///
/// # Examples
///
/// ```
/// use noughts::{ports::RenderSurface, tictactoe::Player};
///
/// struct Counter {
///     cells: usize,
/// }
///
/// impl RenderSurface for Counter {
///     fn show_cell(&mut self, _position: usize, _player: Player) -> noughts::Result<()> {
///         self.cells += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait RenderSurface {
    /// Show `player`'s symbol at `position` (0-8).
    fn show_cell(&mut self, position: usize, player: Player) -> Result<()>;

    /// Show a status line such as `Player X wins!` or `Draw!`.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn show_status(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    /// Clear every cell and the status line.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn show_cell(&mut self, position: usize, player: Player) -> Result<()> {
        (**self).show_cell(position, player)
    }

    fn show_status(&mut self, message: &str) -> Result<()> {
        (**self).show_status(message)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
