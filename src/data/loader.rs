use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::{QuestionKind, QuizQuestion};
use crate::quiz::extract_questions;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} must contain at least one question")]
    NoQuestions { path: PathBuf },
    #[error("{path}: question {number} has options or an answer that do not fit its kind")]
    InvalidQuestion { path: PathBuf, number: u32 },
}

/// Reads a whole file, or standard input for `-`.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    let result = if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };

    result.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Extracts a quiz from a file of assistant text.
pub fn load_quiz_text<P: AsRef<Path>>(path: P) -> Result<Vec<QuizQuestion>, LoadError> {
    let path = path.as_ref();
    let questions = extract_questions(&read_text(path)?);
    ensure_questions(path, questions)
}

/// Loads a question list previously written by [`export_questions_json`].
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizQuestion>, LoadError> {
    let path = path.as_ref();
    let questions: Vec<QuizQuestion> =
        serde_json::from_str(&read_text(path)?).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(bad) = questions.iter().find(|q| !is_well_formed(q)) {
        return Err(LoadError::InvalidQuestion {
            path: path.to_path_buf(),
            number: bad.number,
        });
    }
    ensure_questions(path, questions)
}

// Extracted questions always satisfy this; hand-edited JSON may not.
fn is_well_formed(question: &QuizQuestion) -> bool {
    let answer_in_range = question
        .correct_option
        .is_none_or(|index| index < question.options.len());
    match question.kind {
        QuestionKind::MultipleChoice => answer_in_range,
        QuestionKind::FillBlank => question.options.is_empty() && question.correct_option.is_none(),
    }
}

pub fn export_questions_json(questions: &[QuizQuestion]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(questions)
}

fn ensure_questions(path: &Path, questions: Vec<QuizQuestion>) -> Result<Vec<QuizQuestion>, LoadError> {
    if questions.is_empty() {
        return Err(LoadError::NoQuestions {
            path: path.to_path_buf(),
        });
    }
    info!(path = %path.display(), count = questions.len(), "loaded quiz");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_quiz_text() {
        let file = temp_file("1. Pick\nA) x\nB) y\n### Answers\n1. B)\n");
        let questions = load_quiz_text(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_option, Some(1));
    }

    #[test]
    fn test_text_without_questions_is_rejected() {
        let file = temp_file("No quiz here.");
        let err = load_quiz_text(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions { .. }));
    }

    #[test]
    fn test_json_export_reloads() {
        let questions = extract_questions("1. Fill in the blank: ___\n2. Pick\nA) x");
        let file = temp_file(&export_questions_json(&questions).unwrap());
        assert_eq!(load_questions_from_json(file.path()).unwrap(), questions);
    }

    #[test]
    fn test_bad_json_and_missing_file() {
        let file = temp_file("[{\"number\": \"one\"}]");
        assert!(matches!(
            load_questions_from_json(file.path()),
            Err(LoadError::Json { .. })
        ));
        assert!(matches!(
            load_quiz_text("/definitely/not/here.txt"),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn test_json_answer_out_of_range_is_rejected() {
        let file = temp_file(
            r#"[{"number": 1, "prompt": "Pick", "kind": "multiple-choice",
                "options": [{"letter": "A", "text": "x"}], "correct_option": 7}]"#,
        );
        assert!(matches!(
            load_questions_from_json(file.path()),
            Err(LoadError::InvalidQuestion { number: 1, .. })
        ));
    }

    #[test]
    fn test_json_fill_blank_with_options_is_rejected() {
        let file = temp_file(
            r#"[{"number": 1, "prompt": "Pick", "kind": "multiple-choice", "options": []},
                {"number": 2, "prompt": "Blank ___", "kind": "fill-blank",
                 "options": [{"letter": "A", "text": "x"}]}]"#,
        );
        assert!(matches!(
            load_questions_from_json(file.path()),
            Err(LoadError::InvalidQuestion { number: 2, .. })
        ));
    }
}
