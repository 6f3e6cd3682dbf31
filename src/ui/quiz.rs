use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Answer, Question};
use crate::session::PrimaryAction;

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], session.cursor(), session.total_questions());
    render_kind(frame, chunks[1], question);
    render_question_text(frame, chunks[2], session.cursor(), &question.prompt);

    if question.kind.is_choice() {
        render_options(
            frame,
            chunks[3],
            &question.options,
            app.input.highlighted,
            session.current_answer().and_then(Answer::as_choice),
        );
    } else {
        render_text_answer(
            frame,
            chunks[3],
            session.current_answer().and_then(Answer::as_text).unwrap_or(""),
        );
    }

    let affordances = session.affordances();
    render_controls(
        frame,
        chunks[4],
        affordances.previous_enabled,
        affordances.primary,
        question.kind.is_choice(),
    );
}

fn render_progress(frame: &mut Frame, area: Rect, cursor: usize, total: usize) {
    let ratio = if total > 0 {
        (cursor + 1) as f64 / total as f64
    } else {
        0.0
    };
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", cursor + 1, total));
    frame.render_widget(widget, area);
}

fn render_kind(frame: &mut Frame, area: Rect, question: &Question) {
    let widget = Paragraph::new(question.kind.label())
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, cursor: usize, text: &str) {
    let widget = Paragraph::new(format!("{}. {}", cursor + 1, text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    highlighted: usize,
    chosen: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let is_chosen = chosen == Some(index);
        let style = if is_chosen {
            Style::default().fg(Color::Green).bold()
        } else if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let check = if is_chosen { "●" } else { "○" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, check), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_text_answer(frame: &mut Frame, area: Rect, text: &str) {
    let content = if text.is_empty() {
        Line::from(vec![
            Span::styled("Type your answer here...", Style::default().fg(Color::DarkGray)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            Span::styled(text, Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ])
    };

    let widget = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Your answer ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(
    frame: &mut Frame,
    area: Rect,
    previous_enabled: bool,
    primary: PrimaryAction,
    choice: bool,
) {
    let mut hints: Vec<&str> = Vec::new();
    if choice {
        hints.push("j/k move  ·  space choose");
    }
    if previous_enabled {
        hints.push("← previous");
    }
    hints.push(match primary {
        PrimaryAction::Next => "→/enter next",
        PrimaryAction::Submit => "enter submit",
    });

    let widget = Paragraph::new(hints.join("  ·  "))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
