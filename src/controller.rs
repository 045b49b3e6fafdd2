//! Turn controller: one human move, then the opponent's reply.
//!
//! The controller owns the [`GameSession`], the heuristic opponent and the
//! learning table. It reports everything it does through a
//! [`RenderSurface`] and writes the table and play counter to a
//! [`KeyValueStore`].
//!
//! # Turn sequence
//!
//! ```text
//! handle_cell(p)
//!   ├─ p occupied / out of range / game over ──► Ignored
//!   ├─ human plays p ──► show_cell ──► ended? ──► show_status
//!   └─ still active
//!        ├─ ensure table row for the current board
//!        ├─ opponent decides ──► play ──► show_cell ──► ended? ──► show_status
//!        └─ save table
//! ```

use tracing::{debug, info};

use crate::{
    Result,
    app::GameConfig,
    error::Error,
    opponent::{Decision, HeuristicOpponent, RandomSource, SeededSource},
    persistence::{self, Progress},
    ports::{KeyValueStore, RenderSurface},
    q_learning::{ExplorationSchedule, LearningParams, QTable},
    tictactoe::{Evaluation, GameOutcome, GameSession, Move, Player},
};

/// Symbol placed by the human
pub const HUMAN: Player = Player::X;

/// What happened in response to a cell selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// The selection was not a legal move; nothing changed
    Ignored,
    /// The human's move was played, possibly followed by a reply
    Played {
        human: Move,
        reply: Option<Decision>,
        /// Board evaluation after the last move of the turn
        evaluation: Evaluation,
    },
}

impl TurnReport {
    pub fn is_ignored(&self) -> bool {
        matches!(self, TurnReport::Ignored)
    }

    /// Evaluation at the end of the turn, if a move was played
    pub fn evaluation(&self) -> Option<Evaluation> {
        match self {
            TurnReport::Ignored => None,
            TurnReport::Played { evaluation, .. } => Some(*evaluation),
        }
    }
}

/// Drives a game between the human (X) and the heuristic opponent (O).
///
/// # Examples
///
/// ```
/// use noughts::{
///     adapters::{InMemoryStore, RecordingSurface},
///     app::GameConfig,
///     controller::TurnController,
///     opponent::ScriptedSource,
/// };
///
/// let mut controller = TurnController::new(
///     InMemoryStore::new(),
///     RecordingSurface::new(),
///     ScriptedSource::new([0]),
///     &GameConfig::default(),
/// )?;
///
/// let report = controller.handle_cell(0)?;
/// assert!(!report.is_ignored());
/// assert_eq!(controller.session().board().encode(), "X...O....");
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct TurnController<S, V, R = SeededSource> {
    session: GameSession,
    opponent: HeuristicOpponent<R>,
    store: S,
    surface: V,
    table: QTable,
    params: LearningParams,
    schedule: ExplorationSchedule,
    exploration_rate: f64,
    total_games: u64,
    reward_updates: bool,
}

impl<S, V, R> TurnController<S, V, R>
where
    S: KeyValueStore,
    V: RenderSurface,
    R: RandomSource,
{
    /// Build a controller, reading the table and counter from `store`.
    ///
    /// Unreadable stored values fall back to defaults; only an invalid
    /// `config` is an error.
    pub fn new(store: S, surface: V, rng: R, config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let Progress { table, total_games } = Progress::load(&store);
        let schedule = config.learning.schedule();
        let exploration_rate = schedule.rate_after(total_games);

        debug!(
            states = table.len(),
            total_games, exploration_rate, "loaded saved progress"
        );

        Ok(Self {
            session: GameSession::new(),
            opponent: HeuristicOpponent::new(HUMAN.opponent(), rng),
            store,
            surface,
            table,
            params: config.learning.params(),
            schedule,
            exploration_rate,
            total_games,
            reward_updates: config.learning.reward_updates,
        })
    }

    /// Continue from an existing session instead of an empty board.
    pub fn with_session(mut self, session: GameSession) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// React to the human selecting `position`.
    ///
    /// Occupied or out-of-range cells, and any selection after the game has
    /// ended, are ignored without touching state.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfTurn`] if the session is waiting for the opponent
    /// - render or store failures
    pub fn handle_cell(&mut self, position: usize) -> Result<TurnReport> {
        if !self.session.accepts(position) {
            debug!(
                position,
                active = self.session.is_active(),
                "ignoring cell selection"
            );
            return Ok(TurnReport::Ignored);
        }

        let to_move = self.session.to_move();
        if to_move != HUMAN {
            return Err(Error::OutOfTurn {
                expected: HUMAN,
                actual: to_move,
            });
        }

        let evaluation = self.session.play(position)?;
        self.surface.show_cell(position, HUMAN)?;
        let human = Move {
            position,
            player: HUMAN,
        };

        if evaluation.is_over() {
            self.finish_game(evaluation)?;
            return Ok(TurnReport::Played {
                human,
                reply: None,
                evaluation,
            });
        }

        let (decision, evaluation) = self.opponent_turn()?;
        Ok(TurnReport::Played {
            human,
            reply: Some(decision),
            evaluation,
        })
    }

    /// Let the opponent move on the current board.
    ///
    /// Called by [`handle_cell`](Self::handle_cell); public so a session
    /// resumed with O to move can be advanced.
    pub fn opponent_turn(&mut self) -> Result<(Decision, Evaluation)> {
        if !self.session.is_active() {
            return Err(Error::GameOver);
        }

        let player = self.opponent.player();
        let to_move = self.session.to_move();
        if to_move != player {
            return Err(Error::OutOfTurn {
                expected: player,
                actual: to_move,
            });
        }

        self.table.ensure_state(&self.session.board().encode());

        let decision = self.opponent.decide(self.session.board())?;
        let evaluation = self.session.play(decision.position)?;
        self.surface.show_cell(decision.position, player)?;

        if evaluation.is_over() {
            self.finish_game(evaluation)?;
        }

        persistence::save_table(&self.store, &self.table)?;
        Ok((decision, evaluation))
    }

    /// Clear the board for a new game and count the restart.
    pub fn restart(&mut self) -> Result<()> {
        self.session.reset();
        self.surface.reset()?;

        self.exploration_rate = self.schedule.decay(self.exploration_rate);
        self.total_games += 1;
        persistence::save_total_games(&self.store, self.total_games)?;

        info!(
            total_games = self.total_games,
            exploration_rate = self.exploration_rate,
            "new game"
        );
        Ok(())
    }

    fn finish_game(&mut self, evaluation: Evaluation) -> Result<()> {
        if let Some(message) = evaluation.status_message() {
            self.surface.show_status(&message)?;
        }

        let Some(outcome) = evaluation.outcome() else {
            return Ok(());
        };
        info!(
            outcome = %describe(outcome),
            moves = self.session.moves().len(),
            "game over"
        );

        if self.reward_updates {
            self.table.learn_episode(
                self.session.moves(),
                outcome,
                self.opponent.player(),
                &self.params,
            )?;
            persistence::save_table(&self.store, &self.table)?;
        }
        Ok(())
    }
}

fn describe(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "draw".to_string(),
    }
}
