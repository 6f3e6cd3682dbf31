#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tempfile::TempDir;

pub const SESSION_COOKIE: &str = "session=abc123";

/// A scratch directory holding test documents.
pub struct Docs {
    dir: TempDir,
}

impl Docs {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn pdf(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, b"%PDF-1.4\n1 0 obj\nendobj\n").expect("write pdf");
        path
    }

    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write file");
        path
    }
}

/// Start an in-process backend on an ephemeral port and return its API base
/// URL.
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/upload-pdf", post(upload_pdf))
        .route("/api/generate-quiz", post(generate_quiz))
        .route("/api/analyze-pdf", post(analyze_pdf))
        .route("/api/login", post(login))
        .route("/api/register", post(register));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });

    format!("http://{}/api", addr)
}

async fn upload_pdf(mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let Ok(bytes) = field.bytes().await else {
            break;
        };

        if file_name == "scanned.pdf" {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "No text could be extracted from the PDF" })),
            )
                .into_response();
        }

        return Json(json!({
            "text": format!("{} {} {}", file_name, content_type, bytes.len()),
            "fileName": file_name,
        }))
        .into_response();
    }

    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "No file provided" })),
    )
        .into_response()
}

async fn generate_quiz(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let signed_in = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE));
    if !signed_in {
        // No JSON body, so the client has to fall back to its own message.
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if body["text"] == "" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No text provided for quiz generation" })),
        )
            .into_response();
    }

    let prompt = format!(
        "{} {} {}",
        body["quiz_type"].as_str().unwrap_or("?"),
        body["question_count"],
        body["difficulty"].as_str().unwrap_or("?"),
    );

    Json(json!({
        "quiz": {
            "questions": [
                {
                    "id": 1,
                    "question": prompt,
                    "type": "multiple_choice",
                    "options": ["Paris", "Rome", "Madrid", "Berlin"],
                    "correctAnswer": 0
                },
                {
                    "id": 2,
                    "question": "The sky is green.",
                    "type": "true_false",
                    "options": ["True", "False"],
                    "correctAnswer": 1
                },
                {
                    "id": 3,
                    "question": "Explain photosynthesis.",
                    "type": "short_answer",
                    "correctAnswer": "Light becomes chemical energy."
                }
            ]
        }
    }))
    .into_response()
}

async fn analyze_pdf(Json(body): Json<Value>) -> Response {
    let text = body["text"].as_str().unwrap_or_default().to_string();
    Json(json!({
        "analysis": {
            "total_sentences": 2,
            "factual_sentences_sample": [text],
            "key_terms": ["Paris"],
            "numbers_found": ["1889"],
            "dates_found": [],
            "content_quality": "Good"
        }
    }))
    .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] != "pw" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid username or password" })),
        )
            .into_response();
    }

    (
        [(header::SET_COOKIE, format!("{}; Path=/; HttpOnly", SESSION_COOKIE))],
        Json(json!({
            "user": { "username": body["username"], "email": "ada@example.com" }
        })),
    )
        .into_response()
}

async fn register() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
