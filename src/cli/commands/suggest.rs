//! Suggest command - ask the heuristic opponent for its move on a board

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    cli::{
        commands::parse_player_token,
        output::{print_board, print_kv, print_section},
    },
    opponent::{Decision, HeuristicOpponent},
    tictactoe::{Board, Player, evaluate},
};

#[derive(Parser, Debug)]
#[command(about = "Show the computer's move for a board")]
pub struct SuggestArgs {
    /// Board as nine cells, e.g. "X...O...." (`.`, `_`, `-` or space for empty)
    pub board: String,

    /// Player to move (`x` or `o`); inferred from piece counts if omitted
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("Failed to parse board '{}'", args.board))?;
    let player = match &args.player {
        Some(token) => parse_player_token(token, "--player")?,
        None => board.next_player()?,
    };

    let decision = suggest(&board, player, args.seed)?;

    print_section("Suggested move");
    print_board(&board);
    println!();
    print_kv("Player", &player.to_string());
    print_kv("Cell", &decision.position.to_string());
    print_kv("Rule", &decision.rule.to_string());
    Ok(())
}

/// Decision of an opponent playing `player` on `board`.
pub fn suggest(board: &Board, player: Player, seed: Option<u64>) -> Result<Decision> {
    if let Some(message) = evaluate(board).status_message() {
        bail!("The game on this board is already over ({message})");
    }
    let mut opponent = HeuristicOpponent::seeded(player, seed);
    Ok(opponent.decide(board)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::MoveRule;

    #[test]
    fn test_suggest_blocks() {
        let board = Board::from_string("XX..O....").unwrap();
        let decision = suggest(&board, Player::O, Some(1)).unwrap();
        assert_eq!(decision.position, 2);
        assert_eq!(decision.rule, MoveRule::Block);
    }

    #[test]
    fn test_suggest_for_x() {
        let board = Board::from_string("XO.XO....").unwrap();
        let decision = suggest(&board, Player::X, Some(1)).unwrap();
        assert_eq!(decision.position, 6);
        assert_eq!(decision.rule, MoveRule::WinNow);
    }

    #[test]
    fn test_suggest_rejects_finished_board() {
        let board = Board::from_string("XXXOO....").unwrap();
        let err = suggest(&board, Player::O, None).unwrap_err();
        assert!(err.to_string().contains("Player X wins!"));
    }
}
