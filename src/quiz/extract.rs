//! Question extraction.
//!
//! A single forward pass over trimmed lines. The question being read is an
//! owned [`QuestionBuilder`]; it is moved into the result list when the next
//! question header, the answers heading, or the end of the text is reached.

use std::ops::ControlFlow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::answers::{apply_answers, is_answers_heading, parse_number};
use crate::models::{QuestionKind, QuizOption, QuizQuestion};

static HINTED_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s*\*\*(.+?)\*\*\s*(.+)$").expect("hinted question regex")
});
static PLAIN_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)$").expect("plain question regex"));
static OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-D])\)\s*(.+)$").expect("option regex"));
static MULTIPLE_CHOICE_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)multiple.?choice").expect("multiple choice regex"));
static FILL_BLANK_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fill.?in.?the.?blank").expect("fill blank regex"));

/// Parses questions and resolves their answers from the answer section.
pub fn extract_questions(text: &str) -> Vec<QuizQuestion> {
    let mut questions = parse_question_block(text);
    apply_answers(text, &mut questions);
    debug!(count = questions.len(), "extracted quiz questions");
    questions
}

/// Parses questions up to the answers heading. Answers are left unresolved.
pub fn parse_question_block(text: &str) -> Vec<QuizQuestion> {
    let scan = match text
        .lines()
        .map(str::trim)
        .try_fold(Scan::default(), Scan::feed)
    {
        ControlFlow::Continue(scan) | ControlFlow::Break(scan) => scan,
    };
    scan.finish()
}

#[derive(Default)]
struct Scan {
    finished: Vec<QuizQuestion>,
    current: Option<QuestionBuilder>,
}

impl Scan {
    fn feed(mut self, line: &str) -> ControlFlow<Self, Self> {
        if is_answers_heading(line) {
            return ControlFlow::Break(self);
        }

        if let Some(option) = parse_option(line) {
            if let Some(current) = self.current.as_mut().filter(|c| c.takes_options()) {
                current.options.push(option);
                return ControlFlow::Continue(self);
            }
        }

        if let Some(header) = parse_header(line) {
            self.close_current();
            self.current = Some(QuestionBuilder::start(header, line));
            return ControlFlow::Continue(self);
        }

        if let Some(current) = self.current.as_mut() {
            current.extend_prompt(line);
        }
        ControlFlow::Continue(self)
    }

    fn close_current(&mut self) {
        if let Some(builder) = self.current.take() {
            self.finished.push(builder.build());
        }
    }

    fn finish(mut self) -> Vec<QuizQuestion> {
        self.close_current();
        self.finished
    }
}

struct Header<'a> {
    number: u32,
    prompt: &'a str,
}

/// `N. **hint** text` keeps only `text`; otherwise everything after `N.`.
fn parse_header(line: &str) -> Option<Header<'_>> {
    let (number, prompt) = match HINTED_QUESTION.captures(line) {
        Some(caps) => (caps.get(1)?, caps.get(3)?),
        None => {
            let caps = PLAIN_QUESTION.captures(line)?;
            (caps.get(1)?, caps.get(2)?)
        }
    };

    Some(Header {
        number: parse_number(number.as_str()),
        prompt: prompt.as_str(),
    })
}

fn parse_option(line: &str) -> Option<QuizOption> {
    let caps = OPTION.captures(line)?;
    Some(QuizOption {
        letter: caps[1].chars().next()?,
        text: caps[2].to_string(),
    })
}

fn infer_kind(line: &str) -> QuestionKind {
    if MULTIPLE_CHOICE_HINT.is_match(line) {
        QuestionKind::MultipleChoice
    } else if FILL_BLANK_HINT.is_match(line) {
        QuestionKind::FillBlank
    } else {
        QuestionKind::MultipleChoice
    }
}

struct QuestionBuilder {
    number: u32,
    prompt: String,
    kind: QuestionKind,
    options: Vec<QuizOption>,
}

impl QuestionBuilder {
    fn start(header: Header<'_>, line: &str) -> Self {
        Self {
            number: header.number,
            prompt: header.prompt.to_string(),
            kind: infer_kind(line),
            options: Vec::new(),
        }
    }

    // Option lines under a fill-blank question are read as prompt text.
    fn takes_options(&self) -> bool {
        self.kind == QuestionKind::MultipleChoice
    }

    fn extend_prompt(&mut self, line: &str) {
        if line.is_empty() || line.starts_with('#') || self.prompt.contains(line) {
            return;
        }
        self.prompt.push(' ');
        self.prompt.push_str(line);
    }

    fn build(self) -> QuizQuestion {
        QuizQuestion {
            number: self.number,
            prompt: self.prompt,
            kind: self.kind,
            options: self.options,
            correct_option: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_QUESTIONS: &str = "\
Here is your quiz!

1. **Multiple Choice** Which planet is largest?
A) Mars
B) Jupiter
C) Venus
D) Earth

2. **Multiple Choice** Which gas do plants absorb?
A) Carbon dioxide
B) Oxygen
C) Nitrogen
D) Helium

### Answers
1. B) Jupiter
2. A) Carbon dioxide
";

    fn letters(question: &QuizQuestion) -> String {
        question.options.iter().map(|o| o.letter).collect()
    }

    #[test]
    fn test_single_question_scenario() {
        let text = "1. **Multiple Choice** What is 2+2?\nA) 3\nB) 4\nC) 5\n### Answers\n1. B)";
        let questions = extract_questions(text);

        assert_eq!(questions.len(), 1);
        let question = &questions[0];
        assert_eq!(question.number, 1);
        assert_eq!(question.prompt, "What is 2+2?");
        assert_eq!(question.kind, QuestionKind::MultipleChoice);
        assert_eq!(letters(question), "ABC");
        assert_eq!(question.options[1].text, "4");
        assert_eq!(question.correct_option, Some(1));
    }

    #[test]
    fn test_two_questions_with_answer_key() {
        let questions = extract_questions(TWO_QUESTIONS);

        assert_eq!(questions.len(), 2);
        assert_eq!(letters(&questions[0]), "ABCD");
        assert_eq!(letters(&questions[1]), "ABCD");
        assert_eq!(questions[0].correct_option, questions[0].option_index('B'));
        assert_eq!(questions[1].correct_option, questions[1].option_index('A'));
    }

    #[test]
    fn test_answer_lines_are_not_questions() {
        let questions = parse_question_block(TWO_QUESTIONS);
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.correct_option.is_none()));
    }

    #[test]
    fn test_no_numbered_lines_yields_nothing() {
        assert!(extract_questions("Just some notes.\nA) not an option\n- bullet").is_empty());
        assert!(extract_questions("").is_empty());
    }

    #[test]
    fn test_fill_blank_hint() {
        let questions =
            extract_questions("1. **Fill in the blank:** The capital of France is ____.");
        assert_eq!(questions[0].kind, QuestionKind::FillBlank);
        assert_eq!(questions[0].prompt, "The capital of France is ____.");
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn test_fill_blank_keeps_option_lines_in_prompt() {
        let questions = extract_questions("1. Fill-in-the-blank: water boils at ___\nA) hint");
        assert_eq!(questions[0].kind, QuestionKind::FillBlank);
        assert!(questions[0].options.is_empty());
        assert!(questions[0].prompt.ends_with("A) hint"));
    }

    #[test]
    fn test_continuation_lines_extend_prompt() {
        let text = "1. Consider the code below.\nWhat does it print?\n# heading\nWhat does it print?\nA) 1\nB) 2";
        let questions = extract_questions(text);
        assert_eq!(
            questions[0].prompt,
            "Consider the code below. What does it print?"
        );
        assert_eq!(questions[0].options.len(), 2);
    }

    #[test]
    fn test_bold_only_question_keeps_markup() {
        let questions = extract_questions("3. **What is Rust?**");
        assert_eq!(questions[0].number, 3);
        assert_eq!(questions[0].prompt, "**What is Rust?**");
        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
    }

    #[test]
    fn test_unhinted_question_without_options_is_degenerate() {
        let questions = extract_questions("1. Explain ownership.");
        assert!(questions[0].is_degenerate());
    }

    #[test]
    fn test_duplicate_and_gapped_numbers_are_kept() {
        let questions = extract_questions("2. first\n2. second\n7. third");
        let numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![2, 2, 7]);
    }

    #[test]
    fn test_crlf_and_indentation() {
        let questions = extract_questions("  1. Pick one\r\n   A) yes\r\n   B) no\r\n## Answers\r\n1. a)\r\n");
        assert_eq!(letters(&questions[0]), "AB");
        assert_eq!(questions[0].correct_option, Some(0));
    }

    #[test]
    fn test_oversized_question_number_starts_a_question() {
        let text = "1. first\nA) a\n4294967296. second\nA) b\nB) c\n### Answers\n4294967296. B)";
        let questions = extract_questions(text);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "first");
        assert_eq!(letters(&questions[0]), "A");
        assert_eq!(questions[1].number, u32::MAX);
        assert_eq!(questions[1].prompt, "second");
        assert_eq!(letters(&questions[1]), "AB");
        assert_eq!(questions[1].correct_option, Some(1));

        assert_eq!(extract_questions("4294967296. alone\nA) x").len(), 1);
    }
}
