mod conversation;
mod messages;
pub mod prompts;

pub use conversation::Conversation;
pub use messages::{ChatError, ChatMessage, ChatRequest, ChatResponse, Choice, ChoiceMessage, Role};
