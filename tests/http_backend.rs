mod common;

use common::{Docs, spawn_backend};
use pdf_quiz::api::{AnalyzeRequest, GenerateRequest, LoginRequest, RegisterRequest};
use pdf_quiz::{
    ApiError, ClientConfig, Difficulty, Document, HttpBackend, QuestionKind, QuizBackend,
    QuizOptions,
};

async fn backend() -> HttpBackend {
    let config = ClientConfig::new(&spawn_backend().await).unwrap();
    HttpBackend::new(&config).unwrap()
}

fn login_request(password: &str) -> LoginRequest {
    LoginRequest {
        username: "ada".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_upload_sends_pdf_as_multipart_file() {
    let docs = Docs::new();
    let backend = backend().await;
    let document = Document::open(docs.pdf("notes.pdf")).unwrap();
    let size = document.bytes.len();

    let upload = backend.upload(document).await.unwrap();
    assert_eq!(upload.text, format!("notes.pdf application/pdf {}", size));
    assert_eq!(upload.file_name.as_deref(), Some("notes.pdf"));
}

#[tokio::test]
async fn test_backend_error_message_is_surfaced() {
    let docs = Docs::new();
    let backend = backend().await;
    let document = Document::open(docs.pdf("scanned.pdf")).unwrap();

    let err = backend.upload(document).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Server {
            status: 422,
            message: "No text could be extracted from the PDF".to_string(),
        }
    );
}

#[tokio::test]
async fn test_bodiless_failure_uses_fallback_message() {
    let backend = backend().await;
    let err = backend
        .register(RegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Signup failed");
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let backend = backend().await;
    let err = backend.login(login_request("nope")).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password");
}

#[tokio::test]
async fn test_generate_needs_session_cookie_from_login() {
    let backend = backend().await;
    let options = QuizOptions::new(QuestionKind::MultipleChoice, 3, Difficulty::Hard);
    let request = GenerateRequest::new("Paris is the capital of France.", &options);

    let err = backend.generate(request.clone()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate quiz");

    let user = backend.login(login_request("pw")).await.unwrap();
    assert_eq!(user.greeting(), "Welcome, ada!");

    let questions = backend.generate(request).await.unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].prompt, "multiple_choice 3 hard");
    assert_eq!(questions[0].correct_answer, Some(0));
    assert_eq!(questions[1].kind, QuestionKind::TrueFalse);
    assert_eq!(questions[2].kind, QuestionKind::ShortAnswer);
    assert_eq!(
        questions[2].answer_guide.as_deref(),
        Some("Light becomes chemical energy.")
    );
}

#[tokio::test]
async fn test_analyze_returns_findings() {
    let backend = backend().await;
    let analysis = backend
        .analyze(AnalyzeRequest {
            text: "The tower opened in 1889.".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(analysis.total_sentences, 2);
    assert_eq!(analysis.numbers_found, vec!["1889"]);
    assert_eq!(analysis.content_quality, "Good");
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    // Grab a free port, then close it again.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ClientConfig::new(&format!("http://127.0.0.1:{}/api", port)).unwrap();
    let backend = HttpBackend::new(&config).unwrap();
    let err = backend.login(login_request("pw")).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
}
