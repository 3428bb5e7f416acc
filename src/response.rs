//! Turns a complete assistant reply into markup.

use crate::markdown;
use crate::models::QuizQuestion;
use crate::quiz::{self, html};

/// Rendered form of an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Markdown(String),
    Quiz {
        questions: Vec<QuizQuestion>,
        markup: String,
    },
}

impl Rendered {
    pub fn markup(&self) -> &str {
        match self {
            Rendered::Markdown(markup) | Rendered::Quiz { markup, .. } => markup,
        }
    }

    pub fn into_markup(self) -> String {
        match self {
            Rendered::Markdown(markup) | Rendered::Quiz { markup, .. } => markup,
        }
    }
}

/// Quiz-shaped replies with at least one extractable question become an
/// interactive quiz; everything else is rendered as markdown.
pub fn render_response(text: &str) -> Rendered {
    if quiz::looks_like_quiz(text) {
        let questions = quiz::extract_questions(text);
        if !questions.is_empty() {
            let markup = html::render_quiz(&questions);
            return Rendered::Quiz { questions, markup };
        }
    }
    Rendered::Markdown(markdown::render(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_reply_becomes_interactive() {
        let rendered = render_response("Quiz time!\n1. Pick one\nA) yes\nB) no");
        match rendered {
            Rendered::Quiz { questions, markup } => {
                assert_eq!(questions.len(), 1);
                assert!(markup.contains("quiz-container"));
            }
            other => panic!("expected a quiz, got {other:?}"),
        }
    }

    #[test]
    fn test_quiz_without_questions_falls_back() {
        let rendered = render_response("Want a **quiz** later?");
        assert_eq!(
            rendered,
            Rendered::Markdown("Want a <strong>quiz</strong> later?".to_string())
        );
    }

    #[test]
    fn test_plain_reply_is_markdown() {
        let rendered = render_response("1. first step\n2. second step");
        assert_eq!(rendered.markup(), "1. first step<br>2. second step");
    }
}
