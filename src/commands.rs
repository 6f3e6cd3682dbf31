//! One-shot, non-interactive commands built on the same backend seam as the
//! terminal client.

use std::path::Path;

use tracing::info;

use crate::QuizError;
use crate::api::{AnalyzeRequest, DocumentAnalysis, GenerateRequest, QuizBackend};
use crate::document::Document;
use crate::models::{Quiz, QuizOptions};
use crate::session::SessionError;

/// Upload a PDF and ask the backend what it found in the text.
pub async fn analyze<B: QuizBackend>(
    backend: &B,
    path: &Path,
) -> Result<DocumentAnalysis, QuizError> {
    let document = Document::open(path)?;
    let upload = backend.upload(document).await?;
    info!(chars = upload.text.len(), "text extracted");

    let analysis = backend
        .analyze(AnalyzeRequest { text: upload.text })
        .await?;
    Ok(analysis)
}

/// Upload a PDF and generate a quiz from it.
pub async fn generate<B: QuizBackend>(
    backend: &B,
    path: &Path,
    options: &QuizOptions,
) -> Result<Quiz, QuizError> {
    let document = Document::open(path)?;
    let fallback_name = document.file_name.clone();
    let upload = backend.upload(document).await?;

    let questions = backend
        .generate(GenerateRequest::new(upload.text.clone(), options))
        .await?;
    if questions.is_empty() {
        return Err(SessionError::EmptyQuiz.into());
    }

    info!(questions = questions.len(), "quiz generated");
    Ok(Quiz::new(
        upload.file_name.unwrap_or(fallback_name),
        upload.text,
        questions,
    ))
}
