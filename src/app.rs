use crate::mascot::Mascot;
use crate::models::{QuestionKind, QuizPhase, QuizQuestion, Screen};
use crate::quiz::{QuizSession, Response, ScoreReport};

/// State of the terminal quiz.
pub struct App<'q> {
    pub screen: Screen,
    mascot: Mascot,
    session: QuizSession<'q>,
    current_question_index: usize,
    cursor: usize,
    result_scroll: usize,
}

impl<'q> App<'q> {
    pub fn new(questions: &'q [QuizQuestion], mascot: Mascot) -> Self {
        Self {
            screen: Screen::Welcome,
            mascot,
            session: QuizSession::new(questions),
            current_question_index: 0,
            cursor: 0,
            result_scroll: 0,
        }
    }

    pub fn mascot(&self) -> Mascot {
        self.mascot
    }

    pub fn session(&self) -> &QuizSession<'q> {
        &self.session
    }

    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.session.report()
    }

    pub fn questions(&self) -> &'q [QuizQuestion] {
        self.session.questions()
    }

    pub fn current_question(&self) -> Option<&'q QuizQuestion> {
        self.questions().get(self.current_question_index)
    }

    pub fn current_response(&self) -> Option<&Response> {
        self.session.response(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions().len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Whether keys should be typed into the current question's text field.
    pub fn is_text_entry(&self) -> bool {
        self.current_question()
            .is_some_and(|q| q.kind == QuestionKind::FillBlank)
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        self.screen = Screen::Quiz;
        self.go_to(0);
    }

    pub fn next_question(&mut self) {
        if self.current_question_index + 1 < self.total_questions() {
            self.go_to(self.current_question_index + 1);
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.go_to(self.current_question_index - 1);
        }
    }

    // The cursor starts on the option already chosen, if any.
    fn go_to(&mut self, index: usize) {
        self.current_question_index = index;
        self.cursor = match self.current_response() {
            Some(Response::Choice(Some(chosen))) => *chosen,
            _ => 0,
        };
    }

    /// Records the highlighted option and moves on to the next question.
    pub fn choose_option(&mut self) {
        if !self.is_text_entry() {
            self.session
                .select_option(self.current_question_index, self.cursor);
        }
        self.next_question();
    }

    pub fn type_char(&mut self, c: char) {
        self.session.push_char(self.current_question_index, c);
    }

    pub fn backspace(&mut self) {
        self.session.pop_char(self.current_question_index);
    }

    pub fn check_answers(&mut self) {
        self.session.submit();
        self.screen = Screen::Result;
        self.result_scroll = 0;
    }

    /// Back to editing answers. The quiz stays submitted.
    pub fn back_to_questions(&mut self) {
        self.screen = Screen::Quiz;
        self.go_to(self.current_question_index);
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.total_questions() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.screen = Screen::Welcome;
        self.session = QuizSession::new(self.session.questions());
        self.current_question_index = 0;
        self.cursor = 0;
        self.result_scroll = 0;
    }
}
