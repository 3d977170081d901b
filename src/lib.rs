pub mod chat;
pub mod config;
pub mod conversation;
pub mod database;
pub mod error;
pub mod projects;
pub mod routes;
pub mod storage;
pub mod view;
pub mod workspace;

mod test_helpers;

use config::{AppConfig, StorageBackend};
use database::DatabaseManager;
use error::{AppResult, ChatServiceError, StorageError};
use std::sync::Arc;
use storage::{MemoryStorage, SessionStorage, SessionStore};

/// Builds the session store selected by `config`.
pub fn build_store(config: &AppConfig) -> Result<SessionStore, StorageError> {
    let storage: Arc<dyn SessionStorage> = match config.storage {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::Sqlite => Arc::new(DatabaseManager::in_memory()?),
    };
    Ok(SessionStore::new(storage))
}

/// Builds the HTTP chat client for `config.chat_base_url`.
pub fn build_responder(config: &AppConfig) -> Result<chat::ChatApiClient, ChatServiceError> {
    match config.request_timeout() {
        Some(timeout) => chat::ChatApiClient::with_timeout(&config.chat_base_url, timeout),
        None => Ok(chat::ChatApiClient::new(&config.chat_base_url)),
    }
}

/// Store and chat client wired from one configuration.
pub fn build_services(config: &AppConfig) -> AppResult<(SessionStore, Arc<dyn chat::ChatResponder>)> {
    let store = build_store(config)?;
    let responder: Arc<dyn chat::ChatResponder> = Arc::new(build_responder(config)?);
    Ok((store, responder))
}
