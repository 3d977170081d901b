use crate::error::StorageError;
use crate::storage::SessionStorage;
use rusqlite::{Connection, Result};
use std::sync::{Arc, Mutex};

pub mod entries;
pub mod schema;

/// SQLite-backed session storage. The database lives in memory, so like the
/// browser store it is gone when the process ends.
pub struct DatabaseManager {
    conn: Arc<Mutex<Connection>>,
}

impl DatabaseManager {
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        // Initialize schema
        schema::initialize(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, R>(&self, f: F) -> std::result::Result<R, StorageError>
    where
        F: FnOnce(&Connection) -> Result<R>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(f(&*conn)?)
    }
}

impl SessionStorage for DatabaseManager {
    fn get_item(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        self.with_connection(|conn| entries::get_entry(conn, key))
    }

    fn set_item(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.with_connection(|conn| entries::set_entry(conn, key, value))
    }

    fn remove_item(&self, key: &str) -> std::result::Result<(), StorageError> {
        self.with_connection(|conn| entries::delete_entry(conn, key).map(|_| ()))
    }

    fn keys(&self) -> std::result::Result<Vec<String>, StorageError> {
        self.with_connection(entries::list_keys)
    }

    fn clear(&self) -> std::result::Result<(), StorageError> {
        self.with_connection(|conn| entries::clear_entries(conn).map(|_| ()))
    }
}
