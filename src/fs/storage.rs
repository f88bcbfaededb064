//! Key-value backends for persisting the file system state.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("value stored under '{key}' is not valid UTF-8")]
    Encoding { key: String },
}

/// A string-to-string durable store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Sled-backed store; every write is flushed before returning.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open or create a sled database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(Self { db })
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .db
            .get(key.as_bytes())
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        match value {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| StorageError::Encoding { key: key.to_string() }),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_sled_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SledStore::open(dir.path().join("state")).unwrap();
        assert!(store.get("terminal-filesystem").unwrap().is_none());
        store.set("terminal-filesystem", "{\"a\":1}").unwrap();
        assert_eq!(
            store.get("terminal-filesystem").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        assert!(store.get("other").unwrap().is_none());
    }
}
