//! Quiz text processing: detection, extraction, answer matching, scoring
//! and markup.

mod answers;
mod detect;
mod extract;
pub mod html;
mod session;

pub use answers::{
    ANSWER_MATCHERS, AnswerMatcher, AnswerRef, apply_answers, is_answers_heading,
    match_answer_line,
};
pub use detect::looks_like_quiz;
pub use extract::{extract_questions, parse_question_block};
pub use session::{QuizSession, Response, ScoreReport, ScoreTier, grade};
