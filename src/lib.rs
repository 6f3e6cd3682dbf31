//! # pdf-quiz
//!
//! A terminal client for a PDF-to-quiz backend: pick a PDF, have the
//! backend extract its text and generate questions, then take the quiz
//! against a ten-minute countdown and get a scored breakdown.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pdf_quiz::{App, ClientConfig, HttpBackend, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let backend = HttpBackend::new(&ClientConfig::default())?;
//!     pdf_quiz::client::run(backend, App::new()).await
//! }
//! ```

pub mod api;
pub mod app;
pub mod client;
pub mod commands;
pub mod config;
pub mod document;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod session;
pub mod terminal;
mod ui;

use std::io;

use thiserror::Error;

pub use api::{ApiError, HttpBackend, QuizBackend};
pub use app::{Action, App, View};
pub use config::{ClientConfig, ConfigError};
pub use document::{Document, ValidationError};
pub use models::{Answer, Difficulty, Question, QuestionKind, Quiz, QuizOptions, QuizType};
pub use scoring::{ScoreReport, Tier};
pub use session::{QuizSession, SessionError};

/// Error type for everything outside the interactive controller, which keeps
/// its failures in its own error slot instead.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Could not set up logging: {0}")]
    Logging(String),
    #[error("Could not write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
