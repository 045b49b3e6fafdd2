//! Dependency injection container for the game application.
//!
//! The container owns the key-value store and provides factory methods for
//! controllers and progress queries.

use std::{path::PathBuf, sync::Arc};

use super::config::GameConfig;
use crate::{
    Result,
    adapters::JsonFileStore,
    controller::TurnController,
    opponent::{HeuristicOpponent, SeededSource},
    persistence::{self, Progress},
    ports::{KeyValueStore, RenderSurface},
    tictactoe::Player,
};

/// Shared handle to the configured store
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use noughts::adapters::TerminalSurface;
/// use noughts::app::{App, GameConfig};
///
/// let app = App::new("noughts-data.json");
/// let controller = app.create_controller(TerminalSurface::new(std::io::stdout()), &GameConfig::new())?;
/// # Ok::<(), noughts::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use noughts::adapters::InMemoryStore;
/// use noughts::app::App;
///
/// let app = App::for_testing()
///     .with_store(InMemoryStore::new())
///     .with_default_seed(42)
///     .build();
/// assert_eq!(app.progress().total_games, 0);
/// ```
pub struct App {
    /// Store for the learning table and play counter
    store: SharedStore,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app persisting to a JSON file at `data_path`.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(JsonFileStore::new(data_path)),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    ///
    /// Primarily used for testing with in-memory stores.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the store.
    ///
    /// Returns an Arc-wrapped store that can be shared across threads.
    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Create a turn controller drawing on `surface`.
    ///
    /// The seed comes from `config`, falling back to the container default.
    pub fn create_controller<V: RenderSurface>(
        &self,
        surface: V,
        config: &GameConfig,
    ) -> Result<TurnController<SharedStore, V, SeededSource>> {
        let rng = SeededSource::new(config.seed.or(self.default_seed));
        TurnController::new(self.store(), surface, rng, config)
    }

    /// Create a standalone opponent for `player`.
    pub fn create_opponent(&self, player: Player, seed: Option<u64>) -> HeuristicOpponent {
        HeuristicOpponent::seeded(player, seed.or(self.default_seed))
    }

    /// Saved table and counter, with defaults for anything unreadable.
    pub fn progress(&self) -> Progress {
        Progress::load(&*self.store)
    }

    /// Forget the saved table and counter.
    pub fn reset_progress(&self) -> Result<()> {
        persistence::clear(&*self.store)
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Defaults to an in-memory store when none is given.
///
/// # Examples
///
/// ```
/// use noughts::app::AppBuilder;
/// use noughts::adapters::InMemoryStore;
///
/// let app = AppBuilder::new()
///     .with_store(InMemoryStore::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct AppBuilder {
    store: Option<SharedStore>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            store: None,
            default_seed: None,
        }
    }

    /// Set a custom store.
    pub fn with_store<S: KeyValueStore + Send + Sync + 'static>(mut self, store: S) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set a default random seed for all controllers created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app, using an in-memory store if none was set.
    pub fn build(self) -> App {
        App {
            store: self
                .store
                .unwrap_or_else(|| Arc::new(crate::adapters::InMemoryStore::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::{InMemoryStore, RecordingSurface},
        ports::TOTAL_GAMES_KEY,
    };

    #[test]
    fn test_builder_defaults_to_empty_store() {
        let app = App::for_testing().build();
        assert_eq!(app.progress(), Progress::default());
    }

    #[test]
    fn test_controllers_share_the_store() {
        let store = InMemoryStore::new();
        let app = App::for_testing()
            .with_store(store.clone())
            .with_default_seed(1)
            .build();

        let mut controller = app
            .create_controller(RecordingSurface::new(), &GameConfig::new())
            .unwrap();
        controller.handle_cell(0).unwrap();
        controller.restart().unwrap();

        assert_eq!(store.get(TOTAL_GAMES_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(app.progress().total_games, 1);

        let next = app
            .create_controller(RecordingSurface::new(), &GameConfig::new())
            .unwrap();
        assert_eq!(next.total_games(), 1);
    }

    #[test]
    fn test_reset_progress() {
        let store = InMemoryStore::new().with_entry(TOTAL_GAMES_KEY, "4");
        let app = App::for_testing().with_store(store.clone()).build();

        app.reset_progress().unwrap();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_create_opponent_uses_player() {
        let app = App::for_testing().with_default_seed(5).build();
        assert_eq!(app.create_opponent(Player::X, None).player(), Player::X);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let app = App::for_testing().build();
        let mut config = GameConfig::new();
        config.learning.discount_factor = 2.0;
        assert!(
            app.create_controller(RecordingSurface::new(), &config)
                .is_err()
        );
    }
}
