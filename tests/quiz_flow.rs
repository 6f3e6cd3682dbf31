mod common;

use common::{Docs, spawn_backend};
use pdf_quiz::api::{self, Ticket};
use pdf_quiz::scoring::Tier;
use pdf_quiz::{Action, Answer, App, ClientConfig, HttpBackend, View};

/// Dispatch an action and, when it produces a request, run it to completion.
async fn step(app: &mut App, backend: &HttpBackend, action: Action) {
    if let Some(ticket) = app.dispatch(action) {
        run(app, backend, ticket).await;
    }
}

async fn run(app: &mut App, backend: &HttpBackend, ticket: Ticket) {
    let completion = api::perform(backend, ticket).await;
    app.complete(completion);
}

async fn setup() -> (App, HttpBackend) {
    let config = ClientConfig::new(&spawn_backend().await).unwrap();
    (App::new(), HttpBackend::new(&config).unwrap())
}

#[tokio::test]
async fn test_full_attempt_against_http_backend() {
    let docs = Docs::new();
    let (mut app, backend) = setup().await;

    step(
        &mut app,
        &backend,
        Action::Login {
            username: "ada".to_string(),
            password: "pw".to_string(),
        },
    )
    .await;
    assert_eq!(app.user().map(|u| u.username.as_str()), Some("ada"));

    step(&mut app, &backend, Action::SelectFile(docs.pdf("lecture.pdf"))).await;
    assert_eq!(app.view(), View::Options);
    assert_eq!(app.document_name(), Some("lecture.pdf"));

    step(&mut app, &backend, Action::Generate).await;
    assert_eq!(app.view(), View::Preview);
    assert_eq!(app.quiz().map(|q| q.len()), Some(3));

    step(&mut app, &backend, Action::StartQuiz).await;
    step(&mut app, &backend, Action::Answer(Answer::Choice(0))).await;
    step(&mut app, &backend, Action::Next).await;
    step(&mut app, &backend, Action::Answer(Answer::Choice(0))).await;
    step(&mut app, &backend, Action::Next).await;
    step(
        &mut app,
        &backend,
        Action::Answer(Answer::Text("Plants turn light into sugar".to_string())),
    )
    .await;
    step(&mut app, &backend, Action::Submit).await;

    assert_eq!(app.view(), View::Results);
    let report = app.session().report().unwrap();
    assert_eq!((report.score.correct, report.score.total), (2, 3));
    assert_eq!(report.tier(), Tier::Good);
    assert_eq!(report.message(), "Good job! You have a solid understanding.");
    assert!(!report.forced);
}

#[tokio::test]
async fn test_generate_without_login_reports_fallback() {
    let docs = Docs::new();
    let (mut app, backend) = setup().await;

    step(&mut app, &backend, Action::SelectFile(docs.pdf("lecture.pdf"))).await;
    step(&mut app, &backend, Action::Generate).await;

    assert_eq!(app.view(), View::Options);
    assert_eq!(app.error(), Some("Failed to generate quiz"));
    assert!(!app.is_busy());
}

#[tokio::test]
async fn test_failed_upload_returns_to_upload_screen() {
    let docs = Docs::new();
    let (mut app, backend) = setup().await;

    step(&mut app, &backend, Action::SelectFile(docs.pdf("scanned.pdf"))).await;
    assert_eq!(app.view(), View::Upload);
    assert_eq!(app.error(), Some("No text could be extracted from the PDF"));
}

#[tokio::test]
async fn test_fake_pdf_is_rejected_locally() {
    let docs = Docs::new();
    let (mut app, _backend) = setup().await;

    let ticket = app.dispatch(Action::SelectFile(docs.file("fake.pdf", b"plain text")));
    assert!(ticket.is_none());
    assert_eq!(app.view(), View::Upload);
    assert!(app.error().is_some());
}
