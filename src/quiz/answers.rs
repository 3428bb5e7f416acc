//! Answer-key matching.
//!
//! The answer section starts at the first `## Answers` / `### Solutions`
//! style heading. Every line after it is tried against an ordered list of
//! matchers, strictest first, and the first hit names a question number and
//! an option letter.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::QuizQuestion;

static ANSWERS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*#{1,6}[ \t]*(?:answers?|solutions?)\b").expect("answers heading regex")
});

static BOLD_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)\.\s*\*\*([A-D])\)").expect("bold paren regex"));
static PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)\.\s*([A-D])\)").expect("paren regex"));
static BOLD_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)\.\s*\*\*([A-D])\*\*").expect("bold letter regex"));
static BARE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\.\s*([A-D])\b").expect("bare letter regex"));

/// A question number paired with the letter of its correct option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRef {
    pub number: u32,
    /// Always upper case.
    pub letter: char,
}

pub type AnswerMatcher = fn(&str) -> Option<AnswerRef>;

/// Matchers in the order they are tried: `1. **B)**`, `1. B)`, `1. **B**`,
/// then a bare `1. B` anywhere on the line.
pub const ANSWER_MATCHERS: [(&str, AnswerMatcher); 4] = [
    ("bold-paren", bold_paren),
    ("paren", paren),
    ("bold-letter", bold_letter),
    ("bare-letter", bare_letter),
];

fn bold_paren(line: &str) -> Option<AnswerRef> {
    capture(&BOLD_PAREN, line)
}

fn paren(line: &str) -> Option<AnswerRef> {
    capture(&PAREN, line)
}

fn bold_letter(line: &str) -> Option<AnswerRef> {
    capture(&BOLD_LETTER, line)
}

fn bare_letter(line: &str) -> Option<AnswerRef> {
    capture(&BARE_LETTER, line)
}

fn capture(pattern: &Regex, line: &str) -> Option<AnswerRef> {
    let caps = pattern.captures(line)?;
    let number = parse_number(&caps[1]);
    let letter = caps[2].chars().next()?.to_ascii_uppercase();
    Some(AnswerRef { number, letter })
}

/// Reads a run of digits as a question number. Numbers too large for `u32`
/// saturate, so the header and the answer key still agree on them.
pub(crate) fn parse_number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

/// Runs the matchers over one line, stopping at the first hit.
pub fn match_answer_line(line: &str) -> Option<AnswerRef> {
    ANSWER_MATCHERS.iter().find_map(|(_, matcher)| matcher(line))
}

pub fn is_answers_heading(line: &str) -> bool {
    ANSWERS_HEADING.is_match(line)
}

/// Fills in `correct_option` from the answer section of `text`.
///
/// Text without an answer heading leaves every question untouched. Lines
/// naming an unknown question, a question without options, or a letter the
/// question does not offer are skipped. A later line for the same question
/// overwrites an earlier one.
pub fn apply_answers(text: &str, questions: &mut [QuizQuestion]) {
    // Located on trimmed lines, exactly as the extractor stops at it.
    let mut lines = text.lines().map(str::trim);
    if !lines.by_ref().any(is_answers_heading) {
        debug!("no answer section found");
        return;
    }

    for line in lines {
        if let Some(answer) = match_answer_line(line) {
            record_answer(questions, answer);
        }
    }
}

fn record_answer(questions: &mut [QuizQuestion], answer: AnswerRef) {
    // Duplicate numbers resolve to the first question carrying the number.
    let Some(question) = questions.iter_mut().find(|q| q.number == answer.number) else {
        debug!(number = answer.number, "answer refers to a missing question");
        return;
    };

    if question.options.is_empty() {
        debug!(number = answer.number, "answer refers to a question without options");
        return;
    }

    match question.option_index(answer.letter) {
        Some(index) => {
            debug!(number = answer.number, letter = %answer.letter, index, "matched answer");
            question.correct_option = Some(index);
        }
        None => {
            debug!(number = answer.number, letter = %answer.letter, "answer letter not among options");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionKind, QuizOption};

    fn question(number: u32, letters: &[char]) -> QuizQuestion {
        let mut question = QuizQuestion::new(number, "prompt", QuestionKind::MultipleChoice);
        question.options = letters
            .iter()
            .map(|&letter| QuizOption {
                letter,
                text: format!("option {letter}"),
            })
            .collect();
        question
    }

    fn answer(number: u32, letter: char) -> Option<AnswerRef> {
        Some(AnswerRef { number, letter })
    }

    #[test]
    fn test_each_matcher_in_isolation() {
        let [bold_paren, paren, bold_letter, bare] = ANSWER_MATCHERS.map(|(_, m)| m);

        assert_eq!(bold_paren("1. **B)** 4"), answer(1, 'B'));
        assert_eq!(bold_paren("1. B) 4"), None);

        assert_eq!(paren("2. c) Paris"), answer(2, 'C'));
        assert_eq!(paren("2. **C)**"), None);

        assert_eq!(bold_letter("3. **D**"), answer(3, 'D'));
        assert_eq!(bold_letter("3. D"), None);

        assert_eq!(bare("Question 4. a"), answer(4, 'A'));
        assert_eq!(bare("4. Because it is"), None);
    }

    #[test]
    fn test_match_answer_line_prefers_stricter_patterns() {
        assert_eq!(match_answer_line("12. **A)** because"), answer(12, 'A'));
        assert_eq!(match_answer_line("5. B) then 6. C"), answer(5, 'B'));
        assert_eq!(match_answer_line("The answer is obvious"), None);
    }

    #[test]
    fn test_answers_heading_variants() {
        assert!(is_answers_heading("### Answers"));
        assert!(is_answers_heading("## solutions:"));
        assert!(is_answers_heading("# Answer Key"));
        assert!(!is_answers_heading("Answers"));
        assert!(!is_answers_heading("### Answering questions"));
    }

    #[test]
    fn test_apply_answers_resolves_indices() {
        let mut questions = vec![question(1, &['A', 'B', 'C', 'D']), question(2, &['A', 'B'])];
        apply_answers("...\n### Answers\n1. B) four\n2. **A)**", &mut questions);
        assert_eq!(questions[0].correct_option, Some(1));
        assert_eq!(questions[1].correct_option, Some(0));
    }

    #[test]
    fn test_apply_answers_without_heading_changes_nothing() {
        let mut questions = vec![question(1, &['A', 'B'])];
        apply_answers("1. B)", &mut questions);
        assert_eq!(questions[0].correct_option, None);
    }

    #[test]
    fn test_unknown_question_number_is_skipped() {
        let mut questions = vec![question(1, &['A', 'B']), question(2, &['A', 'B'])];
        apply_answers("### Answers\n3. B)", &mut questions);
        assert!(questions.iter().all(|q| q.correct_option.is_none()));
    }

    #[test]
    fn test_unknown_letter_and_optionless_question_are_skipped() {
        let mut questions = vec![
            question(1, &['A', 'B']),
            QuizQuestion::new(2, "blank", QuestionKind::FillBlank),
        ];
        apply_answers("## Solutions\n1. D)\n2. A)", &mut questions);
        assert_eq!(questions[0].correct_option, None);
        assert_eq!(questions[1].correct_option, None);
    }

    #[test]
    fn test_last_answer_line_wins() {
        let mut questions = vec![question(1, &['A', 'B', 'C'])];
        apply_answers("### Answers\n1. A)\n1. C)", &mut questions);
        assert_eq!(questions[0].correct_option, Some(2));
    }

    #[test]
    fn test_duplicate_numbers_resolve_to_first_question() {
        let mut questions = vec![question(1, &['A', 'B']), question(1, &['A', 'B'])];
        apply_answers("### Answers\n1. B)", &mut questions);
        assert_eq!(questions[0].correct_option, Some(1));
        assert_eq!(questions[1].correct_option, None);
    }

    #[test]
    fn test_heading_after_unicode_indent_is_found() {
        let mut questions = vec![question(1, &['A', 'B'])];
        apply_answers("1. Pick\nA) x\nB) y\n\u{a0}### Answers\n1. B)", &mut questions);
        assert_eq!(questions[0].correct_option, Some(1));
    }

    #[test]
    fn test_oversized_numbers_saturate() {
        assert_eq!(parse_number("42"), 42);
        assert_eq!(parse_number("4294967296"), u32::MAX);
        assert_eq!(match_answer_line("99999999999999999999. C)"), answer(u32::MAX, 'C'));
    }
}
