use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let Some(quiz) = app.quiz() else {
        return;
    };

    let title = Paragraph::new(format!(
        "{} questions from {}",
        quiz.len(),
        quiz.source_file_name
    ))
    .alignment(Alignment::Center)
    .fg(Color::Cyan)
    .bold();
    frame.render_widget(title, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    if quiz.is_empty() {
        lines.push(Line::from(
            "No questions generated. Please try again.".fg(Color::Yellow),
        ));
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", index + 1, question.prompt),
            Style::default().fg(Color::White).bold(),
        )));
        for option in &question.options {
            lines.push(Line::from(Span::styled(
                format!("    • {}", option),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.input.preview_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Preview ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k scroll  ·  s start  ·  g regenerate")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}
