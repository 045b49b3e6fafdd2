//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are scanned
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First fully occupied line in declared order, with its owner
    pub fn completed_line(cells: &[Cell; 9]) -> Option<([usize; 3], Player)> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let owner = cells[a].to_player()?;
            (cells[a] == cells[b] && cells[b] == cells[c]).then_some(([a, b, c], owner))
        })
    }

    /// Cell that completes a line for `player`, scanning lines in declared order
    pub fn completing_move(cells: &[Cell; 9], player: Player) -> Option<usize> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::winning_move_in_line(cells, player, line))
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_completed_line_reports_owner() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some(([2, 4, 6], Player::O))
        );
        assert_eq!(LineAnalyzer::completed_line(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_completing_move_gap_in_middle() {
        // X.X
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::completing_move(&cells, Player::X), Some(1));
        assert_eq!(LineAnalyzer::completing_move(&cells, Player::O), None);
    }

    #[test]
    fn test_completing_move_uses_declared_line_order() {
        // XX.
        // X..
        // ...
        // Row [0,1,2] is declared before column [0,3,6].
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        assert_eq!(LineAnalyzer::completing_move(&cells, Player::X), Some(2));
    }

    #[test]
    fn test_blocked_line_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert_eq!(LineAnalyzer::completing_move(&cells, Player::X), None);
    }

    #[test]
    fn test_no_completing_move() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;

        assert_eq!(LineAnalyzer::completing_move(&cells, Player::X), None);
        assert_eq!(LineAnalyzer::completing_move(&cells, Player::O), None);
    }
}
