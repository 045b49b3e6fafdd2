//! Loading and saving the learning table and play counter.
//!
//! Reads never fail: absent or unreadable values fall back to an empty table
//! and a zero counter, with a warning in the log. Writes propagate errors.

use tracing::warn;

use crate::{
    Result,
    ports::{KeyValueStore, TABLE_KEY, TOTAL_GAMES_KEY},
    q_learning::QTable,
};

/// Everything the game keeps between runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    pub table: QTable,
    pub total_games: u64,
}

impl Progress {
    /// Read both keys, substituting defaults for anything missing or malformed.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Progress {
            table: load_table(store),
            total_games: load_total_games(store),
        }
    }
}

/// Learning table, or an empty one
pub fn load_table<S: KeyValueStore + ?Sized>(store: &S) -> QTable {
    match store.get(TABLE_KEY) {
        Ok(Some(json)) => QTable::from_json(&json).unwrap_or_else(|err| {
            warn!(key = TABLE_KEY, error = %err, "stored table is malformed, starting empty");
            QTable::new()
        }),
        Ok(None) => QTable::new(),
        Err(err) => {
            warn!(key = TABLE_KEY, error = %err, "could not read table, starting empty");
            QTable::new()
        }
    }
}

/// Restart counter, or zero
pub fn load_total_games<S: KeyValueStore + ?Sized>(store: &S) -> u64 {
    match store.get(TOTAL_GAMES_KEY) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = TOTAL_GAMES_KEY, value = %raw, "stored counter is not a number, using 0");
            0
        }),
        Ok(None) => 0,
        Err(err) => {
            warn!(key = TOTAL_GAMES_KEY, error = %err, "could not read counter, using 0");
            0
        }
    }
}

pub fn save_table<S: KeyValueStore + ?Sized>(store: &S, table: &QTable) -> Result<()> {
    store.set(TABLE_KEY, &table.to_json()?)
}

pub fn save_total_games<S: KeyValueStore + ?Sized>(store: &S, total_games: u64) -> Result<()> {
    store.set(TOTAL_GAMES_KEY, &total_games.to_string())
}

/// Remove both keys
pub fn clear<S: KeyValueStore + ?Sized>(store: &S) -> Result<()> {
    store.remove(TABLE_KEY)?;
    store.remove(TOTAL_GAMES_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;

    #[test]
    fn test_defaults_when_absent() {
        let store = InMemoryStore::new();
        assert_eq!(Progress::load(&store), Progress::default());
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let store = InMemoryStore::new();
        store.set(TABLE_KEY, "{not json").unwrap();
        store.set(TOTAL_GAMES_KEY, "many").unwrap();

        let progress = Progress::load(&store);
        assert!(progress.table.is_empty());
        assert_eq!(progress.total_games, 0);
    }

    #[test]
    fn test_save_and_load() {
        let store = InMemoryStore::new();
        let mut table = QTable::new();
        table.ensure_state("X........");

        save_table(&store, &table).unwrap();
        save_total_games(&store, 12).unwrap();

        let progress = Progress::load(&store);
        assert_eq!(progress.table, table);
        assert_eq!(progress.total_games, 12);
        assert_eq!(store.get(TOTAL_GAMES_KEY).unwrap().as_deref(), Some("12"));
    }

    #[test]
    fn test_clear() {
        let store = InMemoryStore::new();
        save_total_games(&store, 3).unwrap();
        save_table(&store, &QTable::new()).unwrap();

        clear(&store).unwrap();
        assert_eq!(store.count(), 0);
    }
}
