use super::SessionStorage;
use crate::error::StorageError;
use crate::projects::types::ProjectRecord;
use std::sync::Arc;

const KEY_PREFIX: &str = "project_";

/// Reads and writes whole project records as JSON under `project_<id>`.
///
/// Treat it as a cache: the backing storage is session-scoped and a second
/// writer to the same key simply wins.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn key_for(project_id: &str) -> String {
        format!("{}{}", KEY_PREFIX, project_id)
    }

    pub fn save(&self, project_id: &str, record: &ProjectRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record).map_err(StorageError::Serialize)?;
        self.storage.set_item(&Self::key_for(project_id), &json)
    }

    /// `Ok(None)` when nothing is stored; an error only when the stored text
    /// does not parse.
    pub fn load(&self, project_id: &str) -> Result<Option<ProjectRecord>, StorageError> {
        let key = Self::key_for(project_id);
        let Some(json) = self.storage.get_item(&key)? else {
            return Ok(None);
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StorageError::Corrupt { key, source })
    }

    pub fn remove(&self, project_id: &str) -> Result<(), StorageError> {
        self.storage.remove_item(&Self::key_for(project_id))
    }

    pub fn list_ids(&self) -> Result<Vec<String>, StorageError> {
        let mut ids: Vec<String> = self
            .storage
            .keys()?
            .into_iter()
            .filter_map(|key| key.strip_prefix(KEY_PREFIX).map(str::to_string))
            .collect();
        ids.sort();
        Ok(ids)
    }
}
