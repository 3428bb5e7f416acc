//! Chat-completion messages exchanged with the assistant proxy.
//!
//! All messages are serialized as JSON in the proxy's request and response
//! bodies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body POSTed to the proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

/// Body returned by the proxy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl ChatResponse {
    /// Text of the first choice.
    pub fn assistant_text(&self) -> Result<&str, ChatError> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .map(|message| message.content.as_str())
            .ok_or(ChatError::InvalidResponse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,
    #[error("Server error. Please try again in a moment.")]
    Server,
    #[error("{0}")]
    Http(String),
    #[error("Invalid response format from AI service")]
    InvalidResponse,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ChatError {
    /// Maps a failed proxy response to an error. `body` is the raw response
    /// body, which may carry an `error` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            429 => ChatError::RateLimited,
            500 => ChatError::Server,
            _ => {
                let detail = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(|body| body.error);
                ChatError::Http(detail.unwrap_or_else(|| format!("HTTP {status}")))
            }
        }
    }
}
