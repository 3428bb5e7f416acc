//! Prompt text sent to the assistant.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::mascot::Mascot;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("html tag regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("No content to {0}")]
    EmptyContent(&'static str),
}

/// Note markup reduced to its text.
pub fn strip_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, "").trim().to_string()
}

/// A chat message. The first turn of a conversation carries the persona and,
/// when there is one, the note being edited.
pub fn chat_prompt(mascot: Mascot, message: &str, note: Option<&str>, first_turn: bool) -> String {
    if !first_turn {
        return message.to_string();
    }

    let persona = mascot.persona();
    let note = note.map(strip_tags).filter(|note| !note.is_empty());
    match note {
        Some(note) => format!(
            "{persona}\n\nBased on the following note content, please respond to the user's question:\n\nNOTE CONTENT:\n{note}\n\nUSER QUESTION:\n{message}\n\nPlease provide a helpful response that takes the note content into account while maintaining your personality."
        ),
        None => format!(
            "{persona}\n\nUSER QUESTION:\n{message}\n\nPlease respond helpfully while maintaining your personality."
        ),
    }
}

pub fn enhance_prompt(mascot: Mascot, content: &str) -> Result<String, PromptError> {
    if content.trim().is_empty() {
        return Err(PromptError::EmptyContent("enhance"));
    }
    Ok(format!(
        "{}\n\nPlease enhance the following note by:\n1. Improving structure and clarity\n2. Adding relevant details where appropriate\n3. Ensuring proper formatting\n4. Maintaining the original intent and voice\n\nNote content:\n{content}\n\nPlease return the enhanced version while maintaining your personality:",
        mascot.persona()
    ))
}

/// Asks for a quiz in the layout the quiz extractor reads: numbered
/// questions, `A)`–`D)` options and a trailing `### Answers` section.
pub fn quiz_prompt(mascot: Mascot, content: &str, question_count: usize) -> Result<String, PromptError> {
    if content.trim().is_empty() {
        return Err(PromptError::EmptyContent("create quiz from"));
    }
    let question_count = question_count.max(1);
    Ok(format!(
        "{}\n\nCreate a quiz with {question_count} question(s) based on the following content.\n\nFormat every question exactly like this:\n1. **Multiple Choice** <question text>\nA) <option>\nB) <option>\nC) <option>\nD) <option>\n\nFill-in-the-blank questions use **Fill in the blank** instead and have no options.\nAfter the last question add a line `### Answers` followed by one line per question, such as `1. B)`.\n\nYou can use markdown formatting including:\n- **bold text**\n- *italic text*\n- Math notation with $$ symbols\n- Block quotes with > symbol\n- Code blocks with ```\n\nContent to make quiz from:\n{content}\n\nPlease create the quiz while maintaining your personality:",
        mascot.persona()
    ))
}
