use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::app::input::{AuthField, AuthForm, AuthMode};

pub fn render(frame: &mut Frame, area: Rect, form: &AuthForm, waiting: bool) {
    let popup = super::centered(area, 52, 13);
    frame.render_widget(Clear, popup);

    let title = match form.mode {
        AuthMode::Login => " Log in ",
        AuthMode::Signup => " Sign up ",
    };

    let mut lines = vec![Line::from("")];
    for field in form.fields() {
        let (label, value) = match field {
            AuthField::Username => ("Username", form.username.clone()),
            AuthField::Email => ("Email", form.email.clone()),
            AuthField::Password => ("Password", "*".repeat(form.password.chars().count())),
        };
        let focused = *field == form.focus;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(Color::Gray)),
            Span::styled(value, style),
        ];
        if focused {
            spans.push(Span::styled("_", style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let switch_hint = match form.mode {
        AuthMode::Login => "^T sign up instead",
        AuthMode::Signup => "^T log in instead",
    };
    lines.push(Line::from(""));
    if waiting {
        lines.push(Line::from("Contacting server...".fg(Color::Yellow)));
    } else {
        lines.push(Line::from(
            format!("Tab next field  ·  Enter submit  ·  {}  ·  Esc close", switch_hint)
                .fg(Color::DarkGray),
        ));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).bold())
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, popup);
}
