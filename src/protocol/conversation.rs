use std::collections::VecDeque;

use crate::config::Settings;

use super::messages::{ChatMessage, ChatRequest};

/// Rolling chat context sent along with new messages.
///
/// Holds at most `max_history_length` user/assistant exchanges; the oldest
/// message is dropped first.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    history: VecDeque<ChatMessage>,
    max_history_length: usize,
}

impl Conversation {
    pub fn new(max_history_length: usize) -> Self {
        Self {
            history: VecDeque::new(),
            max_history_length,
        }
    }

    /// True before the first exchange, when prompts carry the persona.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.history.iter()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn set_max_history_length(&mut self, max_history_length: usize) {
        self.max_history_length = max_history_length;
        self.trim();
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.history.push_back(message);
        self.trim();
    }

    /// Records a completed exchange.
    pub fn record_exchange(&mut self, user: ChatMessage, reply: impl Into<String>) {
        self.push(user);
        self.push(ChatMessage::assistant(reply));
    }

    fn trim(&mut self) {
        while self.history.len() > self.max_history_length * 2 {
            self.history.pop_front();
        }
    }

    /// Builds the request for `message`, optionally prefixed with context and
    /// preceded by the stored history.
    pub fn build_request(
        &self,
        message: &str,
        context: Option<&str>,
        include_history: bool,
        settings: &Settings,
    ) -> ChatRequest {
        let mut messages: Vec<ChatMessage> = if include_history {
            self.history.iter().cloned().collect()
        } else {
            Vec::new()
        };

        let content = match context.filter(|context| !context.is_empty()) {
            Some(context) => format!("Context: {context}\n\nUser: {message}"),
            None => message.to_string(),
        };
        messages.push(ChatMessage::user(content));

        ChatRequest {
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            messages,
        }
    }
}
