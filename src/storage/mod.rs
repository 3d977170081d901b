pub mod store;

pub use store::SessionStore;

use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::Mutex;

/// String key-value store scoped to one session, shaped like the browser's
/// `sessionStorage`. Nothing in it survives a restart.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<F, R>(&self, f: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut HashMap<String, String>) -> R,
    {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(f(&mut entries))
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.with_entries(|entries| entries.keys().cloned().collect())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_entries(|entries| entries.clear())
    }
}
