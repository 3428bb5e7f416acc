//! Scoring for an interactive quiz.
//!
//! A [`QuizSession`] borrows the parsed questions and owns what the user has
//! entered. Checking answers moves it from `Unanswered` to `Submitted`; it
//! never moves back, and checking again simply re-grades the current input.

use std::fmt;

use tracing::debug;

use crate::models::{QuestionKind, QuizPhase, QuizQuestion};

/// What the user has entered for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Index of the chosen option, if any.
    Choice(Option<usize>),
    Text(String),
}

impl Response {
    fn empty_for(question: &QuizQuestion) -> Self {
        match question.kind {
            QuestionKind::MultipleChoice => Response::Choice(None),
            QuestionKind::FillBlank => Response::Text(String::new()),
        }
    }

    pub fn is_answered(&self) -> bool {
        match self {
            Response::Choice(choice) => choice.is_some(),
            Response::Text(text) => !text.trim().is_empty(),
        }
    }
}

/// Grades one response.
///
/// Multiple choice is correct only when an option was chosen and it is the
/// resolved answer, so a question without an answer key is never correct.
/// Fill-blank accepts any non-empty attempt.
pub fn grade(question: &QuizQuestion, response: &Response) -> bool {
    match (question.kind, response) {
        (QuestionKind::MultipleChoice, Response::Choice(Some(chosen))) => {
            question.correct_option == Some(*chosen)
        }
        (QuestionKind::FillBlank, Response::Text(text)) => !text.trim().is_empty(),
        _ => false,
    }
}

/// Feedback band for a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Outstanding,
    Great,
    Good,
    KeepStudying,
}

impl ScoreTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => ScoreTier::Outstanding,
            70..=89 => ScoreTier::Great,
            50..=69 => ScoreTier::Good,
            _ => ScoreTier::KeepStudying,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Outstanding => "Outstanding! You've mastered this topic! \u{1F31F}",
            ScoreTier::Great => "Great work! You have a solid understanding! \u{1F44D}",
            ScoreTier::Good => "Good effort! Review the explanations to improve! \u{1F4DA}",
            ScoreTier::KeepStudying => {
                "Keep studying - you'll get there! Practice makes perfect! \u{1F4AA}"
            }
        }
    }

    /// Short name, used as a CSS class suffix.
    pub fn slug(self) -> &'static str {
        match self {
            ScoreTier::Outstanding => "outstanding",
            ScoreTier::Great => "great",
            ScoreTier::Good => "good",
            ScoreTier::KeepStudying => "keep-studying",
        }
    }
}

/// Outcome of checking answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    /// One entry per question, in question order.
    pub verdicts: Vec<bool>,
}

impl ScoreReport {
    /// Rounded to the nearest whole percent, halves up. Zero for an empty quiz.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct * 200 + self.total) / (self.total * 2)) as u32
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.percentage())
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quiz Complete!\n\nScore: {}/{} ({}%)\n\n{}",
            self.correct,
            self.total,
            self.percentage(),
            self.tier().message()
        )
    }
}

pub struct QuizSession<'q> {
    questions: &'q [QuizQuestion],
    responses: Vec<Response>,
    phase: QuizPhase,
    report: Option<ScoreReport>,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [QuizQuestion]) -> Self {
        Self {
            questions,
            responses: questions.iter().map(Response::empty_for).collect(),
            phase: QuizPhase::Unanswered,
            report: None,
        }
    }

    pub fn questions(&self) -> &'q [QuizQuestion] {
        self.questions
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn response(&self, question_index: usize) -> Option<&Response> {
        self.responses.get(question_index)
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// The report from the most recent check, if answers were checked.
    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    /// Chooses an option. Returns false if the question has no such option.
    pub fn select_option(&mut self, question_index: usize, option_index: usize) -> bool {
        let Some(question) = self.questions.get(question_index) else {
            return false;
        };
        if option_index >= question.options.len() {
            return false;
        }
        match self.responses.get_mut(question_index) {
            Some(Response::Choice(choice)) => {
                *choice = Some(option_index);
                true
            }
            _ => false,
        }
    }

    /// Replaces the text of a fill-blank response.
    pub fn set_text(&mut self, question_index: usize, text: impl Into<String>) -> bool {
        match self.responses.get_mut(question_index) {
            Some(Response::Text(current)) => {
                *current = text.into();
                true
            }
            _ => false,
        }
    }

    pub fn push_char(&mut self, question_index: usize, c: char) -> bool {
        match self.responses.get_mut(question_index) {
            Some(Response::Text(current)) => {
                current.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn pop_char(&mut self, question_index: usize) -> bool {
        match self.responses.get_mut(question_index) {
            Some(Response::Text(current)) => current.pop().is_some(),
            _ => false,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_answered()).count()
    }

    /// Grades every question against the current input.
    pub fn submit(&mut self) -> &ScoreReport {
        let verdicts: Vec<bool> = self
            .questions
            .iter()
            .zip(&self.responses)
            .map(|(question, response)| {
                let correct = grade(question, response);
                if question.kind == QuestionKind::MultipleChoice
                    && question.correct_option.is_none()
                    && response.is_answered()
                {
                    debug!(number = question.number, "no answer key parsed for question");
                }
                correct
            })
            .collect();

        self.phase = QuizPhase::Submitted;
        self.report.insert(ScoreReport {
            correct: verdicts.iter().filter(|&&v| v).count(),
            total: self.questions.len(),
            verdicts,
        })
    }
}
