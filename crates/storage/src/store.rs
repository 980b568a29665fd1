use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors surfaced by state store adapters.
///
/// Callers above the adapter boundary are expected to log these and degrade
/// to empty-state reads or dropped writes rather than propagate them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Durable key-value store for JSON blobs, one blob per concern.
///
/// The contract is deliberately string-in/string-out: schema knowledge lives
/// with the services that own each blob, and every mutation above this trait
/// is a whole-blob read-modify-write so concurrent mutations in one logical
/// session cannot lose updates.
pub trait StateStore: Send + Sync {
    /// Reads the blob stored under `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous blob atomically.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the blob cannot be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the blob under `key`; a no-op if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying store cannot be mutated.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and prototyping.
///
/// Cloning shares the underlying map, so a clone handed to a service still
/// observes writes made through the original handle.
#[derive(Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        guard.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_as_none() {
        let store = MemoryStore::new();
        assert!(store.read("progress").unwrap().is_none());
    }

    #[test]
    fn writes_replace_and_removes_clear() {
        let store = MemoryStore::new();
        store.write("progress", "{}").unwrap();
        store.write("progress", r#"{"m1":1}"#).unwrap();
        assert_eq!(store.read("progress").unwrap().as_deref(), Some(r#"{"m1":1}"#));

        store.remove("progress").unwrap();
        assert!(store.read("progress").unwrap().is_none());

        // Removing a missing key is a no-op.
        store.remove("progress").unwrap();
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.write("activity", "[]").unwrap();
        assert_eq!(store.read("activity").unwrap().as_deref(), Some("[]"));
    }
}
