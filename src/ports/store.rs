//! Key-value persistence port.
//!
//! String keys, string values. Read once at startup and written as the game
//! goes.

use std::sync::Arc;

use crate::Result;

/// Key holding the serialized learning table
pub const TABLE_KEY: &str = "qtable";

/// Key holding the number of restarts, as a decimal integer
pub const TOTAL_GAMES_KEY: &str = "totalGames";

/// Port for a string key-value store.
///
/// Implementations use interior mutability so a store can be shared
/// between the application container and the controllers it creates.
///
/// # Examples
///
/// ```
/// use noughts::adapters::InMemoryStore;
/// use noughts::ports::{KeyValueStore, TOTAL_GAMES_KEY};
///
/// let store = InMemoryStore::new();
/// store.set(TOTAL_GAMES_KEY, "3")?;
/// assert_eq!(store.get(TOTAL_GAMES_KEY)?.as_deref(), Some("3"));
/// # Ok::<(), noughts::Error>(())
/// ```
pub trait KeyValueStore {
    /// Read a value. Absent keys yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
