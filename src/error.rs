use serde::Serialize;
use thiserror::Error;

/// Failures reading or writing the session-scoped project store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Corrupt record under {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// Any failure of the remote chat call. Transport faults and non-2xx replies
/// land in the same type so callers handle them uniformly.
#[derive(Debug, Error)]
pub enum ChatServiceError {
    #[error("Request failed with status: {0}")]
    Status(u16),

    #[error("Chat transport error: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ChatServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChatServiceError::InvalidResponse(err.to_string())
        } else {
            ChatServiceError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    ChatService(#[from] ChatServiceError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
