use serde::{Deserialize, Serialize};

/// Pages the external router can show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Route {
    Landing,
    Projects,
    Project(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Project(id) => format!("/projects/{}", id),
        }
    }
}
