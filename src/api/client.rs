//! reqwest implementation of [`QuizBackend`].

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::document::Document;
use crate::models::{Question, User};

use super::messages::{AnalyzeResponse, AuthResponse, ErrorBody, GenerateResponse};
use super::{
    AnalyzeRequest, ApiError, DocumentAnalysis, GenerateRequest, LoginRequest, QuizBackend,
    RegisterRequest, UploadResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    UploadPdf,
    GenerateQuiz,
    AnalyzePdf,
    Login,
    Register,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::UploadPdf => "upload-pdf",
            Self::GenerateQuiz => "generate-quiz",
            Self::AnalyzePdf => "analyze-pdf",
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    /// Shown when the backend fails without an `error` message.
    pub fn fallback_error(self) -> &'static str {
        match self {
            Self::UploadPdf => "Failed to upload PDF",
            Self::GenerateQuiz => "Failed to generate quiz",
            Self::AnalyzePdf => "Failed to analyze document",
            Self::Login => "Login failed",
            Self::Register => "Signup failed",
        }
    }
}

/// One HTTP client with a cookie store for every call, so the session
/// cookie set by login or register rides along on uploads and generation.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(concat!("pdf-quiz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url().to_string(),
        })
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    async fn post_json<T, R>(&self, endpoint: Endpoint, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;

        read_body(endpoint, response).await
    }
}

fn transport(endpoint: Endpoint, error: reqwest::Error) -> ApiError {
    warn!(endpoint = endpoint.path(), %error, "request failed");
    ApiError::Transport(error.to_string())
}

async fn read_body<R: DeserializeOwned>(endpoint: Endpoint, response: Response) -> Result<R, ApiError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| transport(endpoint, e))?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| endpoint.fallback_error().to_string());

        warn!(endpoint = endpoint.path(), status = status.as_u16(), %message, "backend error");
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

impl QuizBackend for HttpBackend {
    async fn upload(&self, document: Document) -> Result<UploadResponse, ApiError> {
        let endpoint = Endpoint::UploadPdf;
        info!(file = %document.file_name, bytes = document.bytes.len(), "uploading document");

        let mime = document.mime();
        let part = Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(mime)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;

        read_body(endpoint, response).await
    }

    async fn generate(&self, request: GenerateRequest) -> Result<Vec<Question>, ApiError> {
        info!(
            quiz_type = %request.quiz_type,
            count = request.question_count,
            difficulty = %request.difficulty,
            "requesting quiz"
        );

        let response: GenerateResponse = self.post_json(Endpoint::GenerateQuiz, &request).await?;
        response.quiz.into_questions().map_err(ApiError::InvalidQuiz)
    }

    async fn analyze(&self, request: AnalyzeRequest) -> Result<DocumentAnalysis, ApiError> {
        let response: AnalyzeResponse = self.post_json(Endpoint::AnalyzePdf, &request).await?;
        Ok(response.analysis)
    }

    async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        info!(username = %request.username, "logging in");
        let response: AuthResponse = self.post_json(Endpoint::Login, &request).await?;
        Ok(response.user)
    }

    async fn register(&self, request: RegisterRequest) -> Result<User, ApiError> {
        info!(username = %request.username, "registering");
        let response: AuthResponse = self.post_json(Endpoint::Register, &request).await?;
        Ok(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_base() {
        let config = ClientConfig::new("http://quiz.example/api/").unwrap();
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(
            backend.url(Endpoint::GenerateQuiz),
            "http://quiz.example/api/generate-quiz"
        );
        assert_eq!(backend.url(Endpoint::UploadPdf), "http://quiz.example/api/upload-pdf");
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(Endpoint::Login.fallback_error(), "Login failed");
        assert_eq!(Endpoint::Register.fallback_error(), "Signup failed");
    }
}
