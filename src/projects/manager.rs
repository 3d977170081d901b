use crate::chat::ChatResponder;
use crate::error::{AppError, AppResult};
use crate::projects::types::{Message, ProjectDraft, ProjectRecord};
use crate::routes::Route;
use crate::storage::SessionStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreatedProject {
    pub id: String,
    pub route: Route,
    pub record: ProjectRecord,
}

/// Creates and looks up project records for the projects page.
pub struct ProjectsManager {
    store: SessionStore,
    responder: Arc<dyn ChatResponder>,
}

impl ProjectsManager {
    pub fn new(store: SessionStore, responder: Arc<dyn ChatResponder>) -> Self {
        Self { store, responder }
    }

    /// Opens the conversation with the draft's description and stores the
    /// new record under a fresh id. Nothing is stored if either step fails.
    pub async fn create(&self, draft: ProjectDraft) -> AppResult<CreatedProject> {
        if !draft.is_submittable() {
            return Err(AppError::InvalidRequest(
                "Project needs a description or at least one file".to_string(),
            ));
        }

        let reply = self.responder.send(&draft.description).await?;

        let id = Uuid::new_v4().to_string();
        let mut record = ProjectRecord::new(draft.description, draft.files, draft.role);
        record.messages.push(Message::user(record.description.clone()));
        record.messages.push(Message::assistant(reply));

        self.store.save(&id, &record)?;
        log::info!("Created project {} ({})", id, record.short_title());

        Ok(CreatedProject {
            route: Route::Project(id.clone()),
            id,
            record,
        })
    }

    pub fn open(&self, id: &str) -> AppResult<ProjectRecord> {
        self.store
            .load(id)?
            .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))
    }

    /// Every readable project in this session, by id. Corrupt entries are
    /// skipped.
    pub fn list(&self) -> AppResult<Vec<(String, ProjectRecord)>> {
        let mut projects = Vec::new();
        for id in self.store.list_ids()? {
            match self.store.load(&id) {
                Ok(Some(record)) => projects.push((id, record)),
                Ok(None) => {}
                Err(e) => log::warn!("Skipping unreadable project {}: {}", id, e),
            }
        }
        Ok(projects)
    }
}
