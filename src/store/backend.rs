//! Storage backends for schedule persistence.
//!
//! The store only needs a string key-value contract. [`FileStorage`] keeps
//! one JSON file per key under a root directory; [`MemoryStorage`] backs
//! tests and ephemeral sessions.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;

/// String key-value contract the schedule store persists through.
pub trait StorageBackend: Send {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    /// Returns an error when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    /// Returns an error when the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Backend that stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Backend rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory backend; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// An empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn file_storage_absent_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("schedule").unwrap(), None);
    }

    #[test]
    fn file_storage_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set("schedule", "{}").unwrap();
        assert_eq!(storage.get("schedule").unwrap().as_deref(), Some("{}"));

        storage.set("schedule", r#"{"a":1}"#).unwrap();
        assert_eq!(storage.get("schedule").unwrap().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn file_storage_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("deeper");
        let mut storage = FileStorage::new(&root);
        storage.set("schedule", "x").unwrap();
        assert!(root.join("schedule.json").is_file());
    }

    #[test]
    fn memory_storage_round_trips_values() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("schedule").unwrap(), None);
        storage.set("schedule", "one").unwrap();
        storage.set("schedule", "two").unwrap();
        assert_eq!(storage.get("schedule").unwrap().as_deref(), Some("two"));
    }
}
