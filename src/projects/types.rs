use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One turn of a project conversation. Never edited once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// `HH:MM` in local time, as shown under each chat bubble.
    pub fn display_time(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EngineerRole {
    Designer,
    Coder,
    Tester,
}

impl EngineerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineerRole::Designer => "designer",
            EngineerRole::Coder => "coder",
            EngineerRole::Tester => "tester",
        }
    }
}

impl fmt::Display for EngineerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "designer" => Ok(EngineerRole::Designer),
            "coder" => Ok(EngineerRole::Coder),
            "tester" => Ok(EngineerRole::Tester),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Persisted unit of one user-created project. Only `messages` (and `files`,
/// through attachments) grow after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecord {
    pub description: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub role: Option<EngineerRole>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl ProjectRecord {
    pub fn new(description: String, files: Vec<String>, role: Option<EngineerRole>) -> Self {
        Self {
            description,
            files,
            role,
            timestamp: Utc::now(),
            messages: Vec::new(),
        }
    }

    /// First three words of the description, with an ellipsis when truncated.
    pub fn short_title(&self) -> String {
        let words: Vec<&str> = self.description.split_whitespace().collect();
        let mut title = words.iter().take(3).copied().collect::<Vec<_>>().join(" ");
        if words.len() > 3 {
            title.push_str("...");
        }
        title
    }
}

/// Project being composed on the projects page, before submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectDraft {
    pub description: String,
    pub files: Vec<String>,
    pub role: Option<EngineerRole>,
}

impl ProjectDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>) {
        self.files.push(name.into());
    }

    pub fn remove_file(&mut self, index: usize) -> Option<String> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Selecting the already-selected role clears the selection.
    pub fn toggle_role(&mut self, role: EngineerRole) {
        self.role = if self.role == Some(role) { None } else { Some(role) };
    }

    pub fn is_submittable(&self) -> bool {
        !self.description.trim().is_empty() || !self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_layout() {
        let record = ProjectRecord::new("Bridge load simulator".to_string(), vec![], None);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["description"], "Bridge load simulator");
        assert!(value["files"].as_array().unwrap().is_empty());
        assert!(value["role"].is_null());
        assert!(value["messages"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_record_parses_browser_written_json() {
        let raw = r#"{
            "description": "Circuit designer",
            "files": ["schematic.pdf"],
            "role": "coder",
            "timestamp": "2024-05-01T10:00:00.000Z",
            "messages": [
                {"role": "user", "content": "Circuit designer", "timestamp": "2024-05-01T10:00:00.000Z"},
                {"role": "assistant", "content": "Sure.", "timestamp": "2024-05-01T10:00:01.250Z"}
            ]
        }"#;

        let record: ProjectRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.role, Some(EngineerRole::Coder));
        assert_eq!(record.files, vec!["schematic.pdf"]);
        assert_eq!(record.messages.len(), 2);
        assert_eq!(record.messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_record_without_messages_field() {
        let raw = r#"{"description": "x", "files": [], "role": null, "timestamp": "2024-05-01T10:00:00Z"}"#;
        let record: ProjectRecord = serde_json::from_str(raw).unwrap();
        assert!(record.messages.is_empty());
        assert!(record.role.is_none());
    }

    #[test]
    fn test_short_title() {
        let mut record = ProjectRecord::new("Bridge load simulator".to_string(), vec![], None);
        assert_eq!(record.short_title(), "Bridge load simulator");

        record.description = "Bridge load simulator for rail".to_string();
        assert_eq!(record.short_title(), "Bridge load simulator...");
    }

    #[test]
    fn test_draft_role_toggle() {
        let mut draft = ProjectDraft::new("x");
        draft.toggle_role(EngineerRole::Tester);
        assert_eq!(draft.role, Some(EngineerRole::Tester));

        draft.toggle_role(EngineerRole::Designer);
        assert_eq!(draft.role, Some(EngineerRole::Designer));

        draft.toggle_role(EngineerRole::Designer);
        assert_eq!(draft.role, None);
    }

    #[test]
    fn test_draft_submittable() {
        let mut draft = ProjectDraft::new("   ");
        assert!(!draft.is_submittable());

        draft.add_file("loads.csv");
        assert!(draft.is_submittable());

        assert_eq!(draft.remove_file(3), None);
        assert_eq!(draft.remove_file(0), Some("loads.csv".to_string()));
        assert!(!draft.is_submittable());
    }
}
