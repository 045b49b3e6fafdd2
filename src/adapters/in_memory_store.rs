//! In-memory key-value store for testing.
//!
//! This adapter keeps everything in a shared `HashMap`, enabling fast tests
//! without any file system I/O.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, ports::KeyValueStore};

/// In-memory store.
///
/// # Examples
///
/// ```
/// use noughts::adapters::InMemoryStore;
/// use noughts::ports::KeyValueStore;
///
/// let store = InMemoryStore::new().with_entry("totalGames", "7");
/// let shared = store.clone();
///
/// shared.set("qtable", "{}")?;
/// assert_eq!(store.count(), 2);
/// # Ok::<(), noughts::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to inject corrupted data in tests.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Number of keys currently stored.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Remove every key.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}
