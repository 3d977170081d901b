pub mod api_client;
pub mod types;

pub use api_client::ChatApiClient;
pub use types::*;

use crate::error::ChatServiceError;
use async_trait::async_trait;

/// Remote assistant that answers one message at a time.
///
/// Calls are independent: nothing correlates a reply with its request beyond
/// the future that produced it, so overlapping calls may finish in any order.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn send(&self, content: &str) -> Result<String, ChatServiceError>;

    /// Clear any conversation history the service keeps.
    async fn reset(&self) -> Result<(), ChatServiceError> {
        Ok(())
    }
}
