use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;

use super::option_label;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);
    render_badges(frame, chunks[2], app, question);
    render_question_text(frame, chunks[3], &question.text);
    render_options(frame, chunks[4], app, question);
    render_controls(frame, chunks[5], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let content = vec![
        Line::from(Span::styled(
            app.quiz_title().to_string(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Question {} / {}",
                session.current_question_number(),
                session.total_questions()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let gauge = Gauge::default()
        .ratio(session.progress().clamp(0.0, 1.0))
        .label("")
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black));
    frame.render_widget(gauge, chunks[0]);

    let stats = Line::from(vec![
        Span::styled(
            format!("Progress: {}%", session.progress_percentage()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Score: {}/{}", session.score(), session.total_questions()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(stats).alignment(Alignment::Right), chunks[1]);
}

fn render_badges(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let mut spans = vec![Span::styled(
        format!(" Question {} ", app.session().current_question_number()),
        Style::default().fg(Color::Black).bg(Color::Gray),
    )];
    if !question.difficulty.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", question.difficulty),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let selected = app.session().selected_answer();
    let cursor = app.option_cursor();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_chosen = selected == Some(index);
        let style = if is_chosen {
            Style::default().fg(Color::Green).bold()
        } else if index == cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if index == cursor { ">" } else { " " };
        let check = if is_chosen { "*" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {}{} ", marker, check), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let advance = if session.on_last_question() {
        "finish"
    } else {
        "next"
    };
    let mut controls = format!(
        "j/k move  ·  space choose  ·  enter {}  ·  r restart",
        advance
    );
    if session.is_completed() {
        controls.push_str("  ·  t results");
    }
    controls.push_str("  ·  b back  ·  q quit");

    let enabled = session.selected_answer().is_some() && !session.is_completed();
    let color = if enabled { Color::Gray } else { Color::DarkGray };
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}
