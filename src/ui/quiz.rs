use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{QuestionKind, QuizOption, QuizPhase, QuizQuestion};
use crate::quiz::Response;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question);

    match (question.kind, app.current_response()) {
        (QuestionKind::FillBlank, Some(Response::Text(text))) => {
            render_text_field(frame, chunks[2], text);
        }
        (QuestionKind::MultipleChoice, _) if question.options.is_empty() => {
            render_unanswerable(frame, chunks[2]);
        }
        (QuestionKind::MultipleChoice, response) => {
            let chosen = match response {
                Some(Response::Choice(chosen)) => *chosen,
                _ => None,
            };
            render_options(frame, chunks[2], &question.options, app.cursor(), chosen);
        }
        _ => {}
    }

    render_controls(frame, chunks[3], app.is_text_entry());
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let checked = if app.phase() == QuizPhase::Submitted {
        "checked  ·  "
    } else {
        ""
    };
    let progress = format!(
        "{}{} answered  ·  {}/{}",
        checked,
        app.session().answered_count(),
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &QuizQuestion) {
    let widget = Paragraph::new(format!("{}. {}", question.number, question.prompt))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[QuizOption],
    cursor: usize,
    chosen: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_cursor = index == cursor;
        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else if chosen == Some(index) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };
        let check = if chosen == Some(index) { "●" } else { "○" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, check), style),
            Span::styled(format!("{}) ", option.letter), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_text_field(frame: &mut Frame, area: Rect, text: &str) {
    let field = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(area);
    let widget = Paragraph::new(format!("{text}_"))
        .fg(Color::Yellow)
        .block(
            Block::default()
                .title(" Your answer ")
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, field[0]);
}

fn render_unanswerable(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("No options were given for this question.")
        .fg(Color::DarkGray)
        .italic();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, text_entry: bool) {
    let hint = if text_entry {
        "type answer  ·  tab next  ·  shift-tab back  ·  ctrl-s check  ·  esc quit"
    } else {
        "j/k navigate  ·  enter select  ·  tab next  ·  c check  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
