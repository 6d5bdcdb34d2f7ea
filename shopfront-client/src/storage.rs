//! Durable key-value storage capability
//!
//! The cart persists through this seam instead of touching the filesystem
//! directly, so callers can swap in whatever durable store the host
//! platform offers.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string-keyed storage
///
/// Values are opaque serialized payloads. Reading an absent key is
/// `Ok(None)`, not an error.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// File-backed store keeping one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path());

        assert!(store.get("cart").unwrap().is_none());

        store.set("cart", r#"[{"a":1}]"#).unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some(r#"[{"a":1}]"#));

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("nested").join("kv"));

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryKvStore::new();
        assert!(store.get("cart").unwrap().is_none());

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }
}
