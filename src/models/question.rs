use serde::{Deserialize, Serialize};

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    FillBlank,
}

/// One lettered candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub letter: char,
    pub text: String,
}

/// A question recovered from assistant text.
///
/// `number` is the ordinal as written in the source and is the join key
/// against the answer section. It is not deduplicated or renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub number: u32,
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub correct_option: Option<usize>,
}

impl QuizQuestion {
    pub fn new(number: u32, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            number,
            prompt: prompt.into(),
            kind,
            options: Vec::new(),
            correct_option: None,
        }
    }

    /// Position of the option labelled `letter`, compared case-insensitively.
    pub fn option_index(&self, letter: char) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.letter.eq_ignore_ascii_case(&letter))
    }

    /// The option recorded as correct, if an answer was matched.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.correct_option.and_then(|index| self.options.get(index))
    }

    /// Multiple choice with no options cannot be answered at all.
    pub fn is_degenerate(&self) -> bool {
        self.kind == QuestionKind::MultipleChoice && self.options.is_empty()
    }

    /// Whether a submission for this question can ever be marked correct.
    pub fn is_gradable(&self) -> bool {
        match self.kind {
            QuestionKind::MultipleChoice => self.correct_option().is_some(),
            QuestionKind::FillBlank => true,
        }
    }
}
