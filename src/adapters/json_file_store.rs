//! JSON file implementation of the key-value store.
//!
//! All keys live in one JSON object on disk, each value kept as a string:
//!
//! ```text
//! {
//!   "qtable": "{\".........\":[0.0, ...]}",
//!   "totalGames": "4"
//! }
//! ```

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Result, error::Error, ports::KeyValueStore};

/// File-backed store. The file is created on the first write.
///
/// # Examples
///
/// ```no_run
/// use noughts::adapters::JsonFileStore;
/// use noughts::ports::KeyValueStore;
///
/// let store = JsonFileStore::new("noughts-data.json");
/// store.set("totalGames", "1")?;
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("read store file {:?}", self.path),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| Error::SerializationContext {
            operation: format!("parse store file {:?}", self.path),
            message: e.to_string(),
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).map_err(|e| Error::SerializationContext {
                operation: "serialize store entries".to_string(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|source| Error::Io {
            operation: format!("write store file {:?}", self.path),
            source,
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced; a failed read is not
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(Error::SerializationContext { .. }) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonFileStore::new(temp_dir.path().join("absent.json"));
        assert_eq!(store.get("totalGames").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("store.json");

        let store = JsonFileStore::new(&path);
        store.set("totalGames", "3").unwrap();
        store.set("qtable", "{}").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("totalGames").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get("qtable").unwrap().as_deref(), Some("{}"));

        reopened.remove("qtable").unwrap();
        assert_eq!(store.get("qtable").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error_on_read_and_replaced_on_write() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "[1, 2").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.get("totalGames").is_err());

        store.set("totalGames", "1").unwrap();
        assert_eq!(store.get("totalGames").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_unreadable_file_is_not_overwritten() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // A directory cannot be read as a file
        let store = JsonFileStore::new(temp_dir.path());

        let err = store.set("totalGames", "1").unwrap_err();
        assert!(
            matches!(&err, Error::Io { operation, .. } if operation.starts_with("read")),
            "unexpected error: {err}"
        );
        assert!(store.path().is_dir());
    }

    #[test]
    fn test_write_to_invalid_path_returns_error() {
        let store = JsonFileStore::new("/invalid_dir_12345/store.json");
        assert!(store.set("totalGames", "1").is_err());
    }
}
