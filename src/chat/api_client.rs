use super::types::*;
use super::ChatResponder;
use crate::error::ChatServiceError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the chat service (`POST /api/chat`).
pub struct ChatApiClient {
    client: Client,
    base_url: String,
}

impl ChatApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Same as [`ChatApiClient::new`] but every request gives up after
    /// `timeout`. Without it a hung service leaves the request pending.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ChatServiceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<bool, ChatServiceError> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl ChatResponder for ChatApiClient {
    async fn send(&self, content: &str) -> Result<String, ChatServiceError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            content: content.to_string(),
        };

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(ChatServiceError::Status(response.status().as_u16()));
        }

        let data = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ChatServiceError::InvalidResponse(e.to_string()))?;
        Ok(data.response)
    }

    async fn reset(&self) -> Result<(), ChatServiceError> {
        let url = format!("{}/api/chat/reset", self.base_url);
        let response = self.client.post(&url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ChatServiceError::Status(response.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_returns_response_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({ "content": "Bridge load simulator" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "Tell me the span length." })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ChatApiClient::new(&mock_server.uri());
        let reply = client.send("Bridge load simulator").await.unwrap();

        assert_eq!(reply, "Tell me the span length.");
    }

    #[tokio::test]
    async fn test_non_success_status_is_chat_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "detail": "Message content cannot be empty"
            })))
            .mount(&mock_server)
            .await;

        let client = ChatApiClient::new(&mock_server.uri());
        let err = client.send("").await.unwrap_err();

        assert!(matches!(err, ChatServiceError::Status(400)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_chat_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "wrong field" })))
            .mount(&mock_server)
            .await;

        let client = ChatApiClient::new(&mock_server.uri());
        let err = client.send("hi").await.unwrap_err();

        assert!(matches!(err, ChatServiceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_handle_connection_error() {
        // Use a port that's guaranteed not to be listening
        let client = ChatApiClient::new("http://127.0.0.1:59999");
        let err = client.send("status?").await.unwrap_err();

        assert!(matches!(err, ChatServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_chat_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "response": "late" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = ChatApiClient::with_timeout(&mock_server.uri(), Duration::from_millis(50)).unwrap();
        let err = client.send("hi").await.unwrap_err();

        assert!(matches!(err, ChatServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_reset_and_health() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat/reset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Chat history reset successfully"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Backend is running!"
            })))
            .mount(&mock_server)
            .await;

        let client = ChatApiClient::new(&format!("{}/", mock_server.uri()));
        client.reset().await.unwrap();
        assert!(client.health().await.unwrap());
    }
}
