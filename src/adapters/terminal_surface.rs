//! Text surface that redraws the grid after every change.

use std::io::Write;

use crate::{
    Result,
    error::Error,
    ports::RenderSurface,
    tictactoe::{Board, Player},
};

/// Writes the board as a 3x3 grid to any `Write` sink.
///
/// The surface keeps its own copy of what has been shown, so it draws
/// exactly what the controller reported and nothing more.
///
/// # Examples
///
/// ```
/// use noughts::{adapters::TerminalSurface, ports::RenderSurface, tictactoe::Player};
///
/// let mut surface = TerminalSurface::new(Vec::new());
/// surface.show_cell(4, Player::X)?;
///
/// let text = String::from_utf8(surface.into_inner()).unwrap();
/// assert!(text.contains(" X "));
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct TerminalSurface<W: Write> {
    out: W,
    shown: Board,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: Board::new(),
        }
    }

    /// Board as currently displayed
    pub fn shown(&self) -> &Board {
        &self.shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the grid with position numbers in empty cells
    pub fn draw(&mut self) -> Result<()> {
        let rendered = render_grid(&self.shown);
        self.write_text(&rendered)
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")
            .and_then(|_| self.out.flush())
            .map_err(|source| Error::Io {
                operation: "write to terminal".to_string(),
                source,
            })
    }
}

/// Grid text with empty cells labelled by their index
pub fn render_grid(board: &Board) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let position = row * 3 + col;
                    match board.get(position).to_player() {
                        Some(player) => format!(" {player} "),
                        None => format!(" {position} "),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn show_cell(&mut self, position: usize, player: Player) -> Result<()> {
        if let Some(cell) = self.shown.cells.get_mut(position) {
            *cell = player.to_cell();
        }
        self.write_text("")?;
        self.draw()
    }

    fn show_status(&mut self, message: &str) -> Result<()> {
        self.write_text(message)
    }

    fn reset(&mut self) -> Result<()> {
        self.shown = Board::new();
        self.write_text("New game.")?;
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid_labels_empty_cells() {
        let board = Board::from_string("X...O....").unwrap();
        let text = render_grid(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " X | 1 | 2 ");
        assert_eq!(lines[2], " 3 | O | 5 ");
        assert_eq!(lines[4], " 6 | 7 | 8 ");
    }

    #[test]
    fn test_surface_tracks_shown_cells_and_resets() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_cell(0, Player::X).unwrap();
        surface.show_cell(4, Player::O).unwrap();
        surface.show_status("Player X wins!").unwrap();
        assert_eq!(surface.shown().encode(), "X...O....");

        surface.reset().unwrap();
        assert_eq!(surface.shown().encode(), ".........");

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert!(text.contains("Player X wins!"));
        assert!(text.contains("New game."));
    }
}
