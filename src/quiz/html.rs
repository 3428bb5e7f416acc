//! Markup for an interactive quiz.
//!
//! The output is meant for a surface that wires the `checkAnswersBtn`
//! control to a [`QuizSession`](super::QuizSession): each question lives in
//! its own `.quiz-question` container, and its inputs are named `q<index>`
//! so a selection can be read back per question. Question and option text is
//! inserted as-is.

use crate::models::{QuestionKind, QuizQuestion};

use super::session::ScoreReport;

pub const CHECK_ANSWERS_ID: &str = "checkAnswersBtn";

pub fn render_quiz(questions: &[QuizQuestion]) -> String {
    let mut html = String::from("<div class=\"quiz-container\">\n<h2>Interactive Quiz</h2>\n");

    for (index, question) in questions.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"quiz-question\" data-index=\"{index}\">\n<h3>Question {}: {}</h3>\n",
            question.number, question.prompt
        ));
        render_controls(&mut html, index, question);
        html.push_str(&format!(
            "<div class=\"quiz-explanation\" hidden><strong>Answer:</strong> {}</div>\n</div>\n",
            explanation(question)
        ));
    }

    html.push_str(&format!(
        "<button id=\"{CHECK_ANSWERS_ID}\" class=\"check-answers-btn\">Check Answers</button>\n</div>\n"
    ));
    html
}

fn render_controls(html: &mut String, index: usize, question: &QuizQuestion) {
    match question.kind {
        QuestionKind::MultipleChoice => {
            for (option_index, option) in question.options.iter().enumerate() {
                html.push_str(&format!(
                    "<label><input type=\"radio\" name=\"q{index}\" value=\"{option_index}\"> {}) {}</label>\n",
                    option.letter, option.text
                ));
            }
        }
        QuestionKind::FillBlank => {
            html.push_str(&format!(
                "<input type=\"text\" name=\"q{index}\" placeholder=\"Your answer...\">\n"
            ));
        }
    }
}

fn explanation(question: &QuizQuestion) -> String {
    match question.correct_option() {
        Some(option) => format!("Option {}", option.letter),
        None => "See explanation above".to_string(),
    }
}

/// Summary shown after answers are checked.
pub fn render_report(questions: &[QuizQuestion], report: &ScoreReport) -> String {
    let tier = report.tier();
    let mut html = format!(
        "<div class=\"quiz-results tier-{}\">\n<p class=\"quiz-score\">Score: {}/{} ({}%)</p>\n<p class=\"quiz-feedback\">{}</p>\n<ol class=\"quiz-verdicts\">\n",
        tier.slug(),
        report.correct,
        report.total,
        report.percentage(),
        tier.message()
    );

    for (question, &correct) in questions.iter().zip(&report.verdicts) {
        let class = if correct { "correct" } else { "incorrect" };
        html.push_str(&format!(
            "<li class=\"{class}\">Question {}: {}</li>\n",
            question.number,
            explanation(question)
        ));
    }

    html.push_str("</ol>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{QuizSession, extract_questions};

    const MIXED: &str = "\
1. **Multiple Choice** What is 2+2?
A) 3
B) 4
2. **Fill in the blank** Rust's package manager is ____.
3. Describe borrowing.
### Answers
1. B)
";

    #[test]
    fn test_controls_are_scoped_per_question() {
        let html = render_quiz(&extract_questions(MIXED));

        assert_eq!(html.matches("class=\"quiz-question\"").count(), 3);
        assert!(html.contains("<input type=\"radio\" name=\"q0\" value=\"0\"> A) 3</label>"));
        assert!(html.contains("<input type=\"radio\" name=\"q0\" value=\"1\"> B) 4</label>"));
        assert!(html.contains("<input type=\"text\" name=\"q1\""));
        assert!(!html.contains("name=\"q2\""));
        assert!(html.contains("id=\"checkAnswersBtn\""));
    }

    #[test]
    fn test_explanations() {
        let html = render_quiz(&extract_questions(MIXED));
        assert!(html.contains("<strong>Answer:</strong> Option B</div>"));
        assert!(html.contains("<strong>Answer:</strong> See explanation above</div>"));
    }

    #[test]
    fn test_report_markup() {
        let questions = extract_questions(MIXED);
        let mut session = QuizSession::new(&questions);
        session.select_option(0, 1);
        session.set_text(1, "cargo");
        let html = render_report(&questions, session.submit());

        assert!(html.contains("tier-good"));
        assert!(html.contains("Score: 2/3 (67%)"));
        assert!(html.contains("<li class=\"correct\">Question 1: Option B</li>"));
        assert!(html.contains("<li class=\"incorrect\">Question 3"));
    }
}
