//! Boundary to the quiz backend.
//!
//! [`QuizBackend`] is the seam the controller talks through; [`HttpBackend`]
//! is the real REST implementation. Requests leave the controller as
//! [`Ticket`]s and come back as [`Completion`]s carrying the same id, so a
//! reply that arrives after the user moved on can be recognised and dropped.

mod client;
mod messages;

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::document::Document;
use crate::models::{Question, User};

pub use client::{Endpoint, HttpBackend};
pub use messages::{
    AnalyzeRequest, AnswerKey, DocumentAnalysis, ErrorBody, GenerateRequest, LoginRequest,
    RegisterRequest, UploadResponse, WireQuestion, WireQuiz,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx reply. The message is the backend's `error` field, or a
    /// per-call fallback when the body has none.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Could not reach the server: {0}")]
    Transport(String),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
    #[error("The generated quiz is invalid: {0}")]
    InvalidQuiz(String),
}

pub trait QuizBackend: Send + Sync + 'static {
    fn upload(
        &self,
        document: Document,
    ) -> impl Future<Output = Result<UploadResponse, ApiError>> + Send;

    fn generate(
        &self,
        request: GenerateRequest,
    ) -> impl Future<Output = Result<Vec<Question>, ApiError>> + Send;

    fn analyze(
        &self,
        request: AnalyzeRequest,
    ) -> impl Future<Output = Result<DocumentAnalysis, ApiError>> + Send;

    fn login(&self, request: LoginRequest) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub enum Request {
    Upload(Document),
    Generate(GenerateRequest),
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[derive(Debug, Clone)]
pub enum Reply {
    Uploaded(UploadResponse),
    Generated(Vec<Question>),
    Authenticated(User),
}

/// An outbound request tagged with its id.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: Uuid,
    pub request: Request,
}

impl Ticket {
    pub fn new(request: Request) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
        }
    }
}

/// The result of a [`Ticket`].
#[derive(Debug, Clone)]
pub struct Completion {
    pub id: Uuid,
    pub result: Result<Reply, ApiError>,
}

/// Run a ticket against the backend.
pub async fn perform<B: QuizBackend>(backend: &B, ticket: Ticket) -> Completion {
    let result = match ticket.request {
        Request::Upload(document) => backend.upload(document).await.map(Reply::Uploaded),
        Request::Generate(request) => backend.generate(request).await.map(Reply::Generated),
        Request::Login(request) => backend.login(request).await.map(Reply::Authenticated),
        Request::Register(request) => backend.register(request).await.map(Reply::Authenticated),
    };

    Completion {
        id: ticket.id,
        result,
    }
}
