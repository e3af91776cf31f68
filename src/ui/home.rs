use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Lesson, LessonSelection};

const TOPIC_PREVIEW_COUNT: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_entries(frame, chunks[1], app);
    render_controls(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![
        Line::from(Span::styled(
            "LESSON QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "{} lessons · {} questions",
                app.catalog().lessons().len(),
                app.catalog().total_questions()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
    let mut entries: Vec<Vec<Line>> = Vec::new();

    for (index, entry) in app.home_entries().into_iter().enumerate() {
        let is_selected = index == app.home_cursor();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        let mut lines = Vec::new();
        match entry {
            LessonSelection::Lesson(id) => {
                if let Some(lesson) = app.catalog().lesson(id) {
                    lesson_lines(&mut lines, lesson, marker, style);
                }
            }
            LessonSelection::Combined => {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", marker), style),
                    Span::styled("Combined Quiz", style.fg(Color::Magenta)),
                ]));
                lines.push(Line::from(
                    "     Random questions from every lesson".fg(Color::DarkGray),
                ));
            }
        }
        lines.push(Line::from(""));
        entries.push(lines);
    }

    let heights: Vec<usize> = entries.iter().map(Vec::len).collect();
    let first = first_visible_entry(&heights, app.home_cursor(), usize::from(area.height));
    let lines: Vec<Line> = entries.into_iter().skip(first).flatten().collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

/// First entry to draw so that the entry at `cursor` still fits in `height`
/// rows. Earlier entries are shown while there is room above the cursor.
fn first_visible_entry(heights: &[usize], cursor: usize, height: usize) -> usize {
    let Some(&cursor_height) = heights.get(cursor) else {
        return 0;
    };

    let mut first = cursor;
    let mut used = cursor_height;
    while first > 0 && used + heights[first - 1] <= height {
        first -= 1;
        used += heights[first];
    }
    first
}

fn lesson_lines<'a>(lines: &mut Vec<Line<'a>>, lesson: &'a Lesson, marker: &str, style: Style) {
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(format!("Lesson {}  ", lesson.id), style),
        Span::styled(lesson.title.as_str(), style),
        Span::styled(
            format!("  ({} questions)", lesson.questions.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    if !lesson.description.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(lesson.description.as_str(), Style::default().fg(Color::Gray)),
        ]));
    }

    if let Some(topics) = topic_preview(&lesson.topics) {
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(topics, Style::default().fg(Color::DarkGray)),
        ]));
    }
}

fn topic_preview(topics: &[String]) -> Option<String> {
    if topics.is_empty() {
        return None;
    }

    let shown = topics
        .iter()
        .take(TOPIC_PREVIEW_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let hidden = topics.len().saturating_sub(TOPIC_PREVIEW_COUNT);

    Some(if hidden > 0 {
        format!("{} ...and {} more", shown, hidden)
    } else {
        shown
    })
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
