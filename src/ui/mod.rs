mod auth;
mod options;
mod preview;
mod quiz;
mod results;
mod upload;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, View};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], app);

    match app.view() {
        View::Upload => upload::render(frame, chunks[1], app),
        View::Options => options::render(frame, chunks[1], app),
        View::Loading => render_loading(frame, chunks[1], app),
        View::Preview => preview::render(frame, chunks[1], app),
        View::Taking => quiz::render(frame, chunks[1], app),
        View::Results => results::render(frame, chunks[1], app),
    }

    render_status(frame, chunks[2], app);

    if let Some(form) = &app.input.auth {
        auth::render(frame, area, form, app.is_authenticating());
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::horizontal([
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let title = Paragraph::new(" PDF QUIZ").fg(Color::Cyan).bold();
    frame.render_widget(title, columns[0]);

    if app.view() == View::Taking {
        let timer = app.session().timer();
        let color = if timer.remaining() <= 60 {
            Color::Red
        } else {
            Color::Yellow
        };
        let widget = Paragraph::new(format!("Time: {}", timer.display()))
            .alignment(Alignment::Center)
            .fg(color)
            .bold();
        frame.render_widget(widget, columns[1]);
    }

    let account = match app.user() {
        Some(user) => Line::from(vec![
            Span::styled(user.greeting(), Style::default().fg(Color::Green)),
            Span::styled("  ^O log out ", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(
            "^L log in  ·  ^R sign up ",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        Paragraph::new(account).alignment(Alignment::Right),
        columns[2],
    );
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let widget = match app.error() {
        Some(message) => Paragraph::new(format!(" {}  (Esc to dismiss)", message))
            .fg(Color::Red)
            .bold(),
        None => Paragraph::new(" ^C quit").fg(Color::DarkGray),
    };
    frame.render_widget(widget, area);
}

fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(area);

    let what = match app.uploading() {
        Some(name) => format!("Reading {}...", name),
        None => "Generating your quiz...".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(what, Style::default().fg(Color::Yellow).bold())),
        Line::from(""),
        Line::from("This can take a moment.".fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        chunks[1],
    );
}

/// A rectangle of the given size centred in `area`, clipped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
