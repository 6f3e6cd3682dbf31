use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Quiz;
use crate::scoring::{ScoreReport, Tier};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(report), Some(quiz)) = (app.session().report(), app.quiz()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], report);
    render_question_breakdown(frame, chunks[2], quiz, report, app.input.results_scroll);
    render_controls(frame, chunks[3]);
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Excellent => Color::Green,
        Tier::Good => Color::Cyan,
        Tier::Fair => Color::Yellow,
        Tier::NeedsPractice => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, report: &ScoreReport) {
    let color = tier_color(report.tier());

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}/{}  ({:.0}%)",
                report.score.correct,
                report.score.total,
                report.percentage()
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(report.message(), Style::default().fg(color))),
    ];
    if report.forced {
        content.push(Line::from("Time ran out.".fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    quiz: &Quiz,
    report: &ScoreReport,
    scroll: usize,
) {
    let lines: Vec<Line> = report
        .outcomes
        .iter()
        .zip(quiz.questions.iter())
        .map(|(outcome, question)| {
            let (symbol, color) = match (outcome.answered, outcome.correct) {
                (_, true) => ("+", Color::Green),
                (false, false) => ("·", Color::DarkGray),
                (true, false) => ("-", Color::Red),
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", outcome.index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_question(&question.prompt), Style::default().fg(Color::Gray)),
            ];

            let expected = question
                .correct_answer
                .and_then(|i| question.options.get(i))
                .filter(|_| !outcome.correct)
                .or(question.answer_guide.as_ref());
            if let Some(expected) = expected {
                spans.push(Span::styled(
                    format!("  → {}", truncate_question(expected)),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retake  ·  n new quiz  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_question() {
        assert_eq!(truncate_question("short"), "short");
        let long = "x".repeat(QUESTION_PREVIEW_LENGTH + 5);
        let truncated = truncate_question(&long);
        assert_eq!(truncated.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(truncated.ends_with("..."));
    }
}
