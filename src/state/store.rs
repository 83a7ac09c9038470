//! Key-value persistence
//!
//! A store is a single named namespace of integer values. The file-backed
//! store keeps one JSON object per namespace and replaces it atomically.

use crate::error::StoreError;
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Integer key-value storage scoped to one namespace
pub trait KeyValueStore {
    /// Read an integer, `None` if the key is absent or not an integer
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError>;

    /// Write an integer
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn put_int(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
}

/// Namespace stored as `<dir>/<namespace>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn open(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(map).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Atomic replace
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.read_map()?.get(key).and_then(Value::as_i64))
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Json { .. }) => {
                log::warn!("overwriting unreadable store {}", self.path.display());
                Map::new()
            }
            Err(err) => return Err(err),
        };

        map.insert(key.to_string(), Value::from(value));
        self.write_map(&map)
    }
}

/// In-process store, lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, i64>,
}

impl KeyValueStore for MemoryStore {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Enum wrapper for all store backends
pub enum StoreBackend {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl StoreBackend {
    /// Human-readable location for status output
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(store) => store.path().display().to_string(),
            Self::Memory(_) => "memory (not persisted)".to_string(),
        }
    }
}

impl KeyValueStore for StoreBackend {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        match self {
            Self::File(store) => store.get_int(key),
            Self::Memory(store) => store.get_int(key),
        }
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.put_int(key, value),
            Self::Memory(store) => store.put_int(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_named_after_namespace() {
        let store = JsonFileStore::open("/tmp/state", "gameState");
        assert_eq!(store.path(), Path::new("/tmp/state/gameState.json"));
    }

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path(), "gameState");
        assert_eq!(store.get_int("attempts").unwrap(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("nested"), "gameState");

        store.put_int("attempts", 3).unwrap();
        assert_eq!(store.get_int("attempts").unwrap(), Some(3));

        let reopened = JsonFileStore::open(dir.path().join("nested"), "gameState");
        assert_eq!(reopened.get_int("attempts").unwrap(), Some(3));
    }

    #[test]
    fn file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path(), "gameState");

        store.put_int("attempts", 2).unwrap();
        store.put_int("other", 9).unwrap();
        store.put_int("attempts", 0).unwrap();

        assert_eq!(store.get_int("attempts").unwrap(), Some(0));
        assert_eq!(store.get_int("other").unwrap(), Some(9));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_error_on_read_and_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path(), "gameState");
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.get_int("attempts"),
            Err(StoreError::Json { .. })
        ));

        store.put_int("attempts", 1).unwrap();
        assert_eq!(store.get_int("attempts").unwrap(), Some(1));
    }

    #[test]
    fn non_integer_value_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path(), "gameState");
        fs::write(store.path(), r#"{"attempts": "three"}"#).unwrap();

        assert_eq!(store.get_int("attempts").unwrap(), None);
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get_int("attempts").unwrap(), None);

        store.put_int("attempts", 4).unwrap();
        assert_eq!(store.get_int("attempts").unwrap(), Some(4));
    }

    #[test]
    fn backend_dispatches() {
        let mut backend = StoreBackend::Memory(MemoryStore::default());
        backend.put_int("attempts", 2).unwrap();
        assert_eq!(backend.get_int("attempts").unwrap(), Some(2));
        assert_eq!(backend.describe(), "memory (not persisted)");
    }
}
