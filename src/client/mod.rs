//! Interactive terminal client.
//!
//! One task owns the [`App`] and waits on three sources at once: terminal
//! events, a one-second ticker for the quiz countdown, and completions of
//! backend requests running on their own tasks.

mod keys;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::QuizError;
use crate::api::{self, Completion, QuizBackend, Ticket};
use crate::app::{Action, App, View};
use crate::terminal::TerminalGuard;
use crate::ui;

pub use keys::handle_key;

/// Run the TUI until the user quits.
pub async fn run<B: QuizBackend>(backend: B, mut app: App) -> Result<(), QuizError> {
    let backend = Arc::new(backend);
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();

    let mut events = EventStream::new();
    let mut ticker = time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut guard = TerminalGuard::enter()?;
    info!("terminal client started");

    loop {
        guard.terminal().draw(|frame| ui::render(frame, &app))?;
        if app.should_quit {
            break;
        }

        let was_taking = app.view() == View::Taking;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = keys::handle_key(&mut app, key) {
                        if let Some(ticket) = app.dispatch(action) {
                            spawn_request(&backend, &tx, ticket);
                        }
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            _ = ticker.tick() => {
                if was_taking {
                    app.dispatch(Action::Tick);
                }
            }
            Some(completion) = rx.recv() => app.complete(completion),
        }

        // A fresh attempt gets a full first second.
        if !was_taking && app.view() == View::Taking {
            ticker.reset();
        }
    }

    info!("terminal client stopped");
    Ok(())
}

fn spawn_request<B: QuizBackend>(
    backend: &Arc<B>,
    tx: &mpsc::UnboundedSender<Completion>,
    ticket: Ticket,
) {
    let backend = Arc::clone(backend);
    let tx = tx.clone();
    debug!(id = %ticket.id, "spawning request");

    tokio::spawn(async move {
        let completion = api::perform(&*backend, ticket).await;
        // The receiver only goes away when the client is shutting down.
        let _ = tx.send(completion);
    });
}
