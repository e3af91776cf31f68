use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::ReviewEntry;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let percentage = session.percentage();
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(
        frame,
        chunks[1],
        app.quiz_title(),
        session.score(),
        session.total_questions(),
        percentage,
        grade_color,
    );
    render_question_breakdown(frame, chunks[2], &session.review(), app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    score: usize,
    total: usize,
    percentage: u32,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn review_lines<'a>(entry: &ReviewEntry<'a>) -> Vec<Line<'a>> {
    let (symbol, color) = if entry.is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };
    let question = entry.question;

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
        Span::styled(
            format!("{:2}. ", entry.number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(question.text.as_str(), Style::default().fg(Color::White)),
    ])];

    let chosen = match entry.chosen {
        Some(text) => Span::styled(text, Style::default().fg(color)),
        None => Span::styled("No answer", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(vec![
        Span::styled("     Your answer: ", Style::default().fg(Color::Gray)),
        chosen,
    ]));

    if !entry.is_correct {
        lines.push(Line::from(vec![
            Span::styled("     Correct answer: ", Style::default().fg(Color::Gray)),
            Span::styled(
                question.correct_answer.as_str(),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    if let Some(explanation) = question.explanation.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("     Explanation: ", Style::default().fg(Color::Gray)),
            Span::styled(explanation, Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, review: &[ReviewEntry], scroll: usize) {
    // Scroll moves one question at a time, so skip whole entries.
    let lines: Vec<Line> = review
        .iter()
        .skip(scroll)
        .flat_map(review_lines)
        .collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  t question  ·  r restart  ·  b back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::question;

    #[test]
    fn test_grade_colors() {
        assert_eq!(get_grade_color(100), Color::Green);
        assert_eq!(get_grade_color(75), Color::Cyan);
        assert_eq!(get_grade_color(50), Color::Yellow);
        assert_eq!(get_grade_color(10), Color::Red);
    }

    #[test]
    fn test_review_lines_for_wrong_answer() {
        let mut q = question("Capital of France?", &["Paris", "Rome"], "Paris");
        q.explanation = Some("Paris is the capital.".to_string());
        let entry = ReviewEntry {
            number: 2,
            question: &q,
            chosen: Some("Rome"),
            is_correct: false,
        };

        let text: Vec<String> = review_lines(&entry)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert!(text[0].contains("2. Capital of France?"));
        assert!(text[1].contains("Your answer: Rome"));
        assert!(text[2].contains("Correct answer: Paris"));
        assert!(text[3].contains("Explanation: Paris is the capital."));
    }

    #[test]
    fn test_review_lines_for_skipped_question() {
        let q = question("Skipped", &["a", "b"], "a");
        let entry = ReviewEntry {
            number: 1,
            question: &q,
            chosen: None,
            is_correct: false,
        };
        let text: Vec<String> = review_lines(&entry)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert!(text[1].contains("No answer"));
        assert_eq!(text.len(), 4);
    }
}
