//! Durable key-value storage for small settings records.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous byte store addressed by string keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;
    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// One file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read(path)?))
    }

    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FileStore {
        FileStore::new(std::env::temp_dir().join(format!("mlshub-store-{}", uuid::Uuid::new_v4())))
    }

    #[test]
    fn test_file_store_set_get_remove() {
        let store = temp_store();
        assert_eq!(store.get("selectedTeam").unwrap(), None);

        store.set("selectedTeam", b"{\"id\":1}").unwrap();
        assert_eq!(store.get("selectedTeam").unwrap().as_deref(), Some(&b"{\"id\":1}"[..]));

        store.set("selectedTeam", b"{\"id\":3}").unwrap();
        assert_eq!(store.get("selectedTeam").unwrap().as_deref(), Some(&b"{\"id\":3}"[..]));

        store.remove("selectedTeam").unwrap();
        assert_eq!(store.get("selectedTeam").unwrap(), None);

        // Removing a missing key is fine.
        store.remove("selectedTeam").unwrap();

        std::fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let store = temp_store();
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(
                matches!(store.set(key, b"x"), Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_file_store_shared_between_instances() {
        let store = temp_store();
        store.set("k", b"v").unwrap();

        let reopened = FileStore::new(store.dir().clone());
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some(&b"v"[..]));

        std::fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", b"v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"v".to_vec()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
