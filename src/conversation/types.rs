use serde::{Deserialize, Serialize};

/// Shown in place of a reply whenever the chat call fails.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConversationState {
    Uninitialized,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty text and nothing attached; the log is untouched.
    Ignored,
    Answered,
    /// The chat call failed and the fallback reply was appended.
    Failed,
    /// The reply arrived after the owning view went away.
    Discarded,
}

pub fn greeting_for(description: &str) -> String {
    format!(
        "I've analyzed your project: \"{}\". Let's start building this engineering solution. \
         What specific aspects would you like to focus on first?",
        description
    )
}
