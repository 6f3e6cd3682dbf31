use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::app::input::OptionsField;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let file = app.document_name().unwrap_or("document");
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Selected: {}", file),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(
            format!("{} characters extracted", app.extracted_text().chars().count())
                .fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let options = app.options();
    let focus = app.input.options_field;
    let rows = vec![
        Line::from(""),
        field_line(
            "Quiz type",
            options.quiz_type.label().to_string(),
            focus == OptionsField::QuizType,
        ),
        Line::from(""),
        field_line(
            "Questions",
            options.question_count().to_string(),
            focus == OptionsField::QuestionCount,
        ),
        Line::from(""),
        field_line(
            "Difficulty",
            options.difficulty.to_string(),
            focus == OptionsField::Difficulty,
        ),
    ];

    let widget = Paragraph::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Quiz options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k field  ·  h/l change  ·  Enter generate  ·  u other file")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if focused { "> " } else { "  " };

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("< {} >", value), style),
    ])
}
