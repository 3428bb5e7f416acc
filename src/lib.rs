//! # chillquill
//!
//! Text processing for ChillQuill assistant replies: a small markdown
//! renderer, a quiz extractor that reads numbered questions and a trailing
//! answer key, and scoring for taking the quiz interactively, either as
//! markup or in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chillquill::{Mascot, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Extract a quiz from a saved assistant reply
//!     let quiz = Quiz::from_text_file("reply.md", Mascot::default())?;
//!
//!     // Take it in the terminal
//!     if let Some(report) = quiz.run()? {
//!         println!("{report}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod markdown;
mod mascot;
mod models;
pub mod protocol;
pub mod quiz;
mod response;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub use app::App;
pub use config::{ConfigError, Settings, SettingsUpdate};
pub use data::{
    LoadError, STDIN_PATH, export_questions_json, load_questions_from_json, load_quiz_text,
    read_text,
};
pub use mascot::Mascot;
pub use models::{QuestionKind, QuizOption, QuizPhase, QuizQuestion, Screen};
pub use quiz::{QuizSession, ScoreReport, ScoreTier, extract_questions};
pub use response::{Rendered, render_response};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error while the quiz is running.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("The quiz has no questions")]
    Empty,
}

/// A parsed quiz that can be taken in the terminal.
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    mascot: Mascot,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>, mascot: Mascot) -> Self {
        Self { questions, mascot }
    }

    /// Extracts a quiz from a file of assistant text (`-` reads stdin).
    pub fn from_text_file<P: AsRef<Path>>(path: P, mascot: Mascot) -> Result<Self, QuizError> {
        Ok(Self::new(load_quiz_text(path)?, mascot))
    }

    /// Loads a quiz exported as JSON.
    pub fn from_json<P: AsRef<Path>>(path: P, mascot: Mascot) -> Result<Self, QuizError> {
        Ok(Self::new(load_questions_from_json(path)?, mascot))
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Runs the quiz in the terminal until the user quits.
    ///
    /// Returns the report from the last time answers were checked, if they
    /// were.
    pub fn run(&self) -> Result<Option<ScoreReport>, QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::Empty);
        }

        let mut app = App::new(&self.questions, self.mascot);
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut app)?;
        drop(session);

        Ok(app.report().cloned())
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => true,
            KeyCode::Char('s') if app.screen == Screen::Quiz => {
                app.check_answers();
                false
            }
            _ => false,
        };
    }

    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key.code),
        Screen::Quiz => handle_quiz_input(app, key.code),
        Screen::Result => handle_result_input(app, key.code),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc => return true,
        KeyCode::Tab => app.next_question(),
        KeyCode::BackTab => app.previous_question(),
        _ if app.is_text_entry() => match key {
            KeyCode::Char(c) => app.type_char(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Enter => app.next_question(),
            _ => {}
        },
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.check_answers(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('b') | KeyCode::Char('B') => app.back_to_questions(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.check_answers(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}
