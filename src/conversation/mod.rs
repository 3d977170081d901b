pub mod manager;
pub mod types;

pub use manager::ConversationManager;
pub use types::*;
