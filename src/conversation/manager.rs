use super::types::*;
use crate::chat::ChatResponder;
use crate::error::{ChatServiceError, StorageError};
use crate::projects::types::{Message, ProjectRecord};
use crate::storage::SessionStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Owns the message log of one project and keeps the stored record in step
/// with it.
///
/// The log is append-only. A user message is appended before the chat call
/// starts, and the reply (or the fallback) is appended when that call
/// finishes, so overlapping submissions interleave in completion order.
pub struct ConversationManager {
    project_id: String,
    store: SessionStore,
    responder: Arc<dyn ChatResponder>,
    greeting_delay: Duration,
    state: Arc<RwLock<ConversationState>>,
    record: Arc<RwLock<Option<ProjectRecord>>>,
    messages: Arc<RwLock<Vec<Message>>>,
    pending_files: Arc<RwLock<Vec<String>>>,
    disposed: CancellationToken,
}

impl ConversationManager {
    pub fn new(
        project_id: impl Into<String>,
        store: SessionStore,
        responder: Arc<dyn ChatResponder>,
        greeting_delay: Duration,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            store,
            responder,
            greeting_delay,
            state: Arc::new(RwLock::new(ConversationState::Uninitialized)),
            record: Arc::new(RwLock::new(None)),
            messages: Arc::new(RwLock::new(Vec::new())),
            pending_files: Arc::new(RwLock::new(Vec::new())),
            disposed: CancellationToken::new(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Rehydrates the log from the store. Returns `Ok(false)` when no record
    /// exists for this project.
    ///
    /// Only the first successful load does anything. Later calls leave the
    /// in-memory log alone and report whether a record is loaded.
    pub async fn load(&self) -> Result<bool, StorageError> {
        {
            let mut state = self.state.write().await;
            if *state != ConversationState::Uninitialized {
                log::debug!("Project {} already {:?}, skipping load", self.project_id, *state);
                return Ok(*state == ConversationState::Ready);
            }
            *state = ConversationState::Loading;
        }

        let loaded = match self.store.load(&self.project_id) {
            Ok(loaded) => loaded,
            Err(e) => {
                *self.state.write().await = ConversationState::Uninitialized;
                return Err(e);
            }
        };

        let Some(record) = loaded else {
            log::info!("No project data found for ID: {}", self.project_id);
            *self.state.write().await = ConversationState::Uninitialized;
            return Ok(false);
        };

        let needs_greeting = record.messages.is_empty();
        let description = record.description.clone();
        *self.messages.write().await = record.messages.clone();
        *self.record.write().await = Some(record);
        *self.state.write().await = ConversationState::Ready;

        if needs_greeting {
            self.schedule_greeting(description);
        }

        Ok(true)
    }

    fn schedule_greeting(&self, description: String) {
        let messages = Arc::clone(&self.messages);
        let token = self.disposed.clone();
        let delay = self.greeting_delay;
        let project_id = self.project_id.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    log::debug!("Greeting for project {} cancelled", project_id);
                }
                _ = tokio::time::sleep(delay) => {
                    if token.is_cancelled() {
                        return;
                    }
                    messages.write().await.push(Message::assistant(greeting_for(&description)));
                }
            }
        });
    }

    /// Sends `text` to the assistant.
    ///
    /// Failures never escape: a failed call leaves the user's message in the
    /// log followed by [`FALLBACK_REPLY`], and nothing is retried. Before the
    /// first successful load, and after [`dispose`](Self::dispose), nothing is
    /// appended or sent.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if self.is_disposed() {
            log::info!("Ignoring submit for project {}: view already closed", self.project_id);
            return SubmitOutcome::Discarded;
        }

        let state = self.state().await;
        if state != ConversationState::Ready {
            log::warn!("Ignoring submit for project {}: conversation is {:?}", self.project_id, state);
            return SubmitOutcome::Ignored;
        }

        let attachments = {
            let mut pending = self.pending_files.write().await;
            if text.trim().is_empty() && pending.is_empty() {
                return SubmitOutcome::Ignored;
            }
            std::mem::take(&mut *pending)
        };

        self.messages.write().await.push(Message::user(text));

        if !attachments.is_empty() {
            if let Some(record) = self.record.write().await.as_mut() {
                record.files.extend(attachments);
            }
        }

        let result = self.responder.send(text).await;

        if self.is_disposed() {
            log::info!(
                "Discarding chat reply for project {}: view already closed",
                self.project_id
            );
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(reply) => {
                self.messages.write().await.push(Message::assistant(reply));
                self.persist().await;
                SubmitOutcome::Answered
            }
            Err(e) => {
                log::error!("API error for project {}: {}", self.project_id, e);
                self.messages.write().await.push(Message::assistant(FALLBACK_REPLY));
                SubmitOutcome::Failed
            }
        }
    }

    async fn persist(&self) {
        let Some(snapshot) = self.record().await else {
            log::warn!("Not persisting project {}: no record loaded", self.project_id);
            return;
        };

        if let Err(e) = self.store.save(&self.project_id, &snapshot) {
            log::error!("Failed to persist project {}: {}", self.project_id, e);
        }
    }

    pub async fn attach_file(&self, name: impl Into<String>) {
        self.pending_files.write().await.push(name.into());
    }

    pub async fn remove_attachment(&self, index: usize) -> Option<String> {
        let mut pending = self.pending_files.write().await;
        if index < pending.len() {
            Some(pending.remove(index))
        } else {
            None
        }
    }

    pub async fn pending_attachments(&self) -> Vec<String> {
        self.pending_files.read().await.clone()
    }

    /// Asks the service to forget its side of the conversation. The local log
    /// is kept.
    pub async fn reset_remote(&self) -> Result<(), ChatServiceError> {
        self.responder.reset().await
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    pub async fn state(&self) -> ConversationState {
        *self.state.read().await
    }

    /// The loaded record with the current log merged in.
    pub async fn record(&self) -> Option<ProjectRecord> {
        let record = self.record.read().await;
        let mut snapshot = record.as_ref()?.clone();
        snapshot.messages = self.messages.read().await.clone();
        Some(snapshot)
    }

    /// Marks the owning view as gone. Pending greetings are cancelled and
    /// replies that complete afterwards are dropped.
    pub fn dispose(&self) {
        self.disposed.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.is_cancelled()
    }
}

impl Drop for ConversationManager {
    fn drop(&mut self) {
        self.disposed.cancel();
    }
}
