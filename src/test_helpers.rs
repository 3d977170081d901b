#[cfg(test)]
pub mod mocks {
    use crate::chat::ChatResponder;
    use crate::error::{ChatServiceError, StorageError};
    use crate::storage::SessionStorage;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Chat responder with canned behavior. Replies are `"re: <content>"`
    /// unless the content is scripted to fail or to take longer.
    pub struct MockResponder {
        failing: Vec<String>,
        delays: HashMap<String, Duration>,
        fail_all: bool,
        pub calls: Mutex<Vec<String>>,
    }

    impl MockResponder {
        pub fn new() -> Self {
            Self {
                failing: Vec::new(),
                delays: HashMap::new(),
                fail_all: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail_all: true,
                ..Self::new()
            }
        }

        pub fn fail_on(mut self, content: &str) -> Self {
            self.failing.push(content.to_string());
            self
        }

        pub fn delay_on(mut self, content: &str, delay: Duration) -> Self {
            self.delays.insert(content.to_string(), delay);
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatResponder for MockResponder {
        async fn send(&self, content: &str) -> Result<String, ChatServiceError> {
            self.calls.lock().unwrap().push(content.to_string());

            if let Some(delay) = self.delays.get(content) {
                tokio::time::sleep(*delay).await;
            }

            if self.fail_all || self.failing.iter().any(|c| c == content) {
                return Err(ChatServiceError::Transport("connection refused".to_string()));
            }

            Ok(format!("re: {}", content))
        }
    }

    /// Storage that serves preloaded entries and rejects every write.
    #[derive(Default)]
    pub struct ReadOnlyStorage {
        entries: HashMap<String, String>,
    }

    impl ReadOnlyStorage {
        pub fn with_entry(key: &str, value: &str) -> Self {
            let mut entries = HashMap::new();
            entries.insert(key.to_string(), value.to_string());
            Self { entries }
        }
    }

    impl SessionStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.get(key).cloned())
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("read-only".to_string()))
        }

        fn keys(&self) -> Result<Vec<String>, StorageError> {
            Ok(self.entries.keys().cloned().collect())
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Backend("read-only".to_string()))
        }
    }
}
