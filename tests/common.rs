//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::{
    adapters::{InMemoryStore, RecordingSurface},
    app::GameConfig,
    controller::TurnController,
    opponent::ScriptedSource,
    tictactoe::{Board, GameSession, Player, evaluate, reachable_boards},
};

pub type TestController = TurnController<InMemoryStore, RecordingSurface, ScriptedSource>;

/// Parse a board literal, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board {s:?}: {e}"))
}

pub fn session(s: &str) -> GameSession {
    GameSession::from_board(board(s)).unwrap_or_else(|e| panic!("bad test session {s:?}: {e}"))
}

/// Controller over `store` with scripted random picks.
pub fn controller_with(
    store: InMemoryStore,
    picks: impl IntoIterator<Item = usize>,
    config: &GameConfig,
) -> TestController {
    TurnController::new(
        store,
        RecordingSurface::new(),
        ScriptedSource::new(picks),
        config,
    )
    .expect("controller should build")
}

/// Every reachable, unfinished board where `player` moves next.
pub fn open_boards_for(player: Player) -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|board| !evaluate(board).is_over())
        .filter(|board| board.next_player().ok() == Some(player))
        .collect()
}

/// Cells where `player` would complete a line on `board`.
pub fn completing_cells(board: &Board, player: Player) -> Vec<usize> {
    board
        .empty_positions()
        .into_iter()
        .filter(|&pos| {
            board
                .with_move(pos, player)
                .map(|next| evaluate(&next).winner == Some(player))
                .unwrap_or(false)
        })
        .collect()
}
