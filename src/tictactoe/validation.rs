//! Board consistency checks and reachable-position enumeration

use std::collections::HashSet;

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
    outcome::evaluate,
};

impl Board {
    /// Check if the board could arise in a game where X opens and play stops
    /// at the first completed line.
    pub fn is_reachable(&self) -> bool {
        let count = self.count_pieces();

        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = LineAnalyzer::has_won(&self.cells, Player::X);
        let o_wins = LineAnalyzer::has_won(&self.cells, Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner moved last
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        // Two lines for one player must come from a single placement
        for (won, player) in [(x_wins, Player::X), (o_wins, Player::O)] {
            if won && !self.winning_lines_share_cell(player) {
                return false;
            }
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let lines: Vec<&[usize; 3]> = super::WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == cell))
            .collect();

        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

/// Every board reachable from the empty board with X moving first,
/// including terminal positions, in discovery order.
pub fn reachable_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);

        if evaluate(&board).is_over() {
            continue;
        }

        let Ok(player) = board.next_player() else {
            continue;
        };
        for pos in board.empty_positions() {
            if let Ok(next) = board.with_move(pos, player) {
                stack.push(next);
            }
        }
    }

    boards
}
