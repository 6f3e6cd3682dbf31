//! JSON bodies exchanged with the quiz backend.
//!
//! Field names follow the backend's wire format (`quiz_type`,
//! `correctAnswer`, `fileName`); everything is converted into the typed
//! models in [`crate::models`] before it reaches the controller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, Question, QuestionKind, QuizOptions, QuizType, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub text: String,
    pub quiz_type: QuizType,
    pub question_count: u32,
    pub difficulty: Difficulty,
}

impl GenerateRequest {
    pub fn new(text: impl Into<String>, options: &QuizOptions) -> Self {
        Self {
            text: text.into(),
            quiz_type: options.quiz_type,
            question_count: options.question_count(),
            difficulty: options.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// Passwords stay out of logs.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Text extracted from an uploaded PDF.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub text: String,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub quiz: WireQuiz,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireQuiz {
    #[serde(default)]
    pub questions: Vec<WireQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireQuestion {
    #[serde(default)]
    pub id: Option<u32>,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: Option<AnswerKey>,
}

/// `correctAnswer` is an option index for choice questions and a free-text
/// guide for short answers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Index(usize),
    Guide(String),
}

impl WireQuestion {
    pub fn into_question(self, position: usize) -> Result<Question, String> {
        let question = if self.kind.is_choice() {
            let correct = match self.correct_answer {
                Some(AnswerKey::Index(index)) => index,
                Some(AnswerKey::Guide(_)) | None => {
                    return Err(format!(
                        "question {} has no correct option index",
                        position + 1
                    ));
                }
            };
            Question::choice(self.kind, self.question, self.options, correct)
                .map_err(|reason| format!("question {}: {}", position + 1, reason))?
        } else {
            let guide = match self.correct_answer {
                Some(AnswerKey::Guide(guide)) => Some(guide),
                _ => None,
            };
            Question::short_answer(self.question, guide)
        };

        Ok(match self.id {
            Some(id) => question.with_id(id),
            None => question,
        })
    }
}

impl WireQuiz {
    pub fn into_questions(self) -> Result<Vec<Question>, String> {
        self.questions
            .into_iter()
            .enumerate()
            .map(|(position, question)| question.into_question(position))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: DocumentAnalysis,
}

/// What the backend found worth asking about in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub total_sentences: usize,
    #[serde(default)]
    pub factual_sentences_sample: Vec<String>,
    #[serde(default)]
    pub key_terms: Vec<String>,
    #[serde(default)]
    pub numbers_found: Vec<String>,
    #[serde(default)]
    pub dates_found: Vec<String>,
    #[serde(default)]
    pub content_quality: String,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
