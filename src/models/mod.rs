mod question;

pub use question::{QuestionKind, QuizOption, QuizQuestion};

/// Which screen the terminal quiz is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Result,
}

/// Grading phase of an interactive quiz. Moves forward only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Unanswered,
    Submitted,
}
