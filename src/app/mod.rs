//! The controller.
//!
//! [`App`] owns every piece of client state and is driven through
//! [`App::dispatch`] with [`Action`]s. Actions that need the backend return
//! a [`Ticket`]; the event loop runs it and hands the [`Completion`] back
//! through [`App::complete`]. Failures of any kind end up in the single
//! error slot shown at the bottom of the screen.

pub mod input;

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::{
    ApiError, Completion, GenerateRequest, LoginRequest, RegisterRequest, Reply, Request, Ticket,
};
use crate::document::{Document, ValidationError};
use crate::models::{Answer, Difficulty, Quiz, QuizOptions, QuizType, User};
use crate::session::{Phase, QuizSession, SessionError};

use input::InputState;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Upload,
    Options,
    Loading,
    Preview,
    Taking,
    Results,
}

/// Everything the user can ask the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectFile(PathBuf),
    /// Leave the options screen to pick a different PDF.
    ChangeFile,
    SetQuizType(QuizType),
    SetQuestionCount(u32),
    SetDifficulty(Difficulty),
    Generate,
    StartQuiz,
    Answer(Answer),
    Next,
    Previous,
    Submit,
    /// One second of wall clock.
    Tick,
    Retake,
    NewQuiz,
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
    },
    Logout,
    DismissError,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Please wait for the current request to finish.")]
    Busy,
    #[error("Upload a PDF before generating a quiz.")]
    NoDocument,
    #[error("That is not available on the {0:?} screen.")]
    WrongView(View),
}

#[derive(Debug, Clone)]
enum Transfer {
    Upload { id: Uuid, file_name: String },
    Generate { id: Uuid },
}

impl Transfer {
    fn id(&self) -> Uuid {
        match self {
            Self::Upload { id, .. } | Self::Generate { id } => *id,
        }
    }
}

pub struct App {
    view: View,
    user: Option<User>,
    document_name: Option<String>,
    extracted_text: String,
    options: QuizOptions,
    session: QuizSession,
    /// Upload or generation in flight. At most one at a time.
    transfer: Option<Transfer>,
    /// Login or register in flight.
    auth_request: Option<Uuid>,
    error: Option<String>,
    pub input: InputState,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_session(QuizSession::new())
    }

    /// Start from a custom session, e.g. one with a shorter countdown.
    pub fn with_session(session: QuizSession) -> Self {
        Self {
            view: View::Upload,
            user: None,
            document_name: None,
            extracted_text: String::new(),
            options: QuizOptions::default(),
            session,
            transfer: None,
            auth_request: None,
            error: None,
            input: InputState::default(),
            should_quit: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref()
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn options(&self) -> &QuizOptions {
        &self.options
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.session.quiz()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.transfer.is_some()
    }

    /// File name of the upload in flight, if any.
    pub fn uploading(&self) -> Option<&str> {
        match &self.transfer {
            Some(Transfer::Upload { file_name, .. }) => Some(file_name),
            _ => None,
        }
    }

    pub fn is_authenticating(&self) -> bool {
        self.auth_request.is_some()
    }

    /// Apply an action. Returns a ticket when the backend has to be called.
    pub fn dispatch(&mut self, action: Action) -> Option<Ticket> {
        match self.apply(action) {
            Ok(ticket) => ticket,
            Err(err) => {
                warn!(%err, view = ?self.view, "action rejected");
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<Option<Ticket>, AppError> {
        match action {
            Action::SelectFile(path) => self.select_file(path).map(Some),
            Action::ChangeFile => {
                self.expect_view(View::Options)?;
                self.forget_document();
                self.view = View::Upload;
                Ok(None)
            }
            Action::SetQuizType(quiz_type) => {
                self.expect_view(View::Options)?;
                self.options.quiz_type = quiz_type;
                Ok(None)
            }
            Action::SetQuestionCount(count) => {
                self.expect_view(View::Options)?;
                self.options.set_question_count(count);
                Ok(None)
            }
            Action::SetDifficulty(difficulty) => {
                self.expect_view(View::Options)?;
                self.options.difficulty = difficulty;
                Ok(None)
            }
            Action::Generate => self.generate().map(Some),
            Action::StartQuiz => {
                self.expect_view(View::Preview)?;
                self.session.start()?;
                self.enter_taking();
                Ok(None)
            }
            Action::Answer(answer) => {
                self.expect_view(View::Taking)?;
                self.session.record_answer(answer)?;
                Ok(None)
            }
            Action::Next => {
                self.expect_view(View::Taking)?;
                self.session.advance()?;
                self.sync_highlight();
                Ok(None)
            }
            Action::Previous => {
                self.expect_view(View::Taking)?;
                self.session.retreat()?;
                self.sync_highlight();
                Ok(None)
            }
            Action::Submit => {
                self.expect_view(View::Taking)?;
                self.session.submit()?;
                self.enter_results();
                Ok(None)
            }
            Action::Tick => {
                if self.session.tick().is_some() {
                    self.enter_results();
                }
                Ok(None)
            }
            Action::Retake => {
                self.expect_view(View::Results)?;
                self.session.retake()?;
                self.enter_taking();
                Ok(None)
            }
            Action::NewQuiz => {
                self.expect_view(View::Results)?;
                self.session.reset()?;
                self.forget_document();
                self.view = View::Upload;
                info!("starting over with a new document");
                Ok(None)
            }
            Action::Login { username, password } => {
                self.authenticate(Request::Login(LoginRequest { username, password }))
            }
            Action::Register {
                username,
                email,
                password,
            } => self.authenticate(Request::Register(RegisterRequest {
                username,
                email,
                password,
            })),
            Action::Logout => {
                self.logout();
                Ok(None)
            }
            Action::DismissError => {
                self.error = None;
                Ok(None)
            }
        }
    }

    fn select_file(&mut self, path: PathBuf) -> Result<Ticket, AppError> {
        // Checked first: a pending transfer always shows the loading screen.
        if self.transfer.is_some() {
            return Err(AppError::Busy);
        }
        if !matches!(self.view, View::Upload | View::Options) {
            return Err(AppError::WrongView(self.view));
        }

        let document = Document::open(&path)?;
        info!(file = %document.file_name, "document selected");

        self.error = None;
        self.view = View::Loading;
        let file_name = document.file_name.clone();
        let ticket = Ticket::new(Request::Upload(document));
        self.transfer = Some(Transfer::Upload {
            id: ticket.id,
            file_name,
        });
        Ok(ticket)
    }

    fn generate(&mut self) -> Result<Ticket, AppError> {
        if self.transfer.is_some() {
            return Err(AppError::Busy);
        }
        if !matches!(self.view, View::Options | View::Preview) {
            return Err(AppError::WrongView(self.view));
        }
        if self.extracted_text.is_empty() {
            return Err(AppError::NoDocument);
        }

        self.error = None;
        self.view = View::Loading;
        let ticket = Ticket::new(Request::Generate(GenerateRequest::new(
            self.extracted_text.clone(),
            &self.options,
        )));
        self.transfer = Some(Transfer::Generate { id: ticket.id });
        Ok(ticket)
    }

    fn authenticate(&mut self, request: Request) -> Result<Option<Ticket>, AppError> {
        if self.auth_request.is_some() {
            return Err(AppError::Busy);
        }
        let ticket = Ticket::new(request);
        self.auth_request = Some(ticket.id);
        Ok(Some(ticket))
    }

    /// Feed back the result of a ticket. Results for requests that were
    /// abandoned in the meantime are ignored.
    pub fn complete(&mut self, completion: Completion) {
        if self.transfer.as_ref().map(Transfer::id) == Some(completion.id) {
            if let Some(transfer) = self.transfer.take() {
                self.finish_transfer(transfer, completion.result);
            }
        } else if self.auth_request == Some(completion.id) {
            self.auth_request = None;
            self.finish_auth(completion.result);
        } else {
            debug!(id = %completion.id, "dropping stale completion");
        }
    }

    fn finish_transfer(&mut self, transfer: Transfer, result: Result<Reply, ApiError>) {
        match (transfer, result) {
            (Transfer::Upload { file_name, .. }, Ok(Reply::Uploaded(upload))) => {
                info!(chars = upload.text.len(), "text extracted");
                self.extracted_text = upload.text;
                self.document_name = Some(upload.file_name.unwrap_or(file_name));
                self.view = View::Options;
            }
            (Transfer::Generate { .. }, Ok(Reply::Generated(questions))) => {
                let quiz = Quiz::new(
                    self.document_name.clone().unwrap_or_default(),
                    self.extracted_text.clone(),
                    questions,
                );
                match self.session.preview(quiz) {
                    Ok(()) => {
                        self.input.preview_scroll = 0;
                        self.view = View::Preview;
                    }
                    Err(err) => self.fail_transfer(View::Options, err.into()),
                }
            }
            (Transfer::Upload { .. }, Err(err)) => self.fail_transfer(View::Upload, err.into()),
            (Transfer::Generate { .. }, Err(err)) => self.fail_transfer(View::Options, err.into()),
            (transfer, Ok(reply)) => {
                warn!(?transfer, ?reply, "reply does not match request");
                let back = match transfer {
                    Transfer::Upload { .. } => View::Upload,
                    Transfer::Generate { .. } => View::Options,
                };
                self.fail_transfer(
                    back,
                    ApiError::Decode("reply does not match request".to_string()).into(),
                );
            }
        }
    }

    fn fail_transfer(&mut self, back_to: View, err: AppError) {
        warn!(%err, "request failed");
        self.error = Some(err.to_string());
        self.view = back_to;
    }

    fn finish_auth(&mut self, result: Result<Reply, ApiError>) {
        match result {
            Ok(Reply::Authenticated(user)) => {
                info!(username = %user.username, "signed in");
                self.user = Some(user);
                self.input.auth = None;
                self.error = None;
            }
            Ok(other) => {
                warn!(reply = ?other, "unexpected reply to sign-in");
                self.error = Some(ApiError::Decode("unexpected reply".to_string()).to_string());
            }
            Err(err) => {
                warn!(%err, "sign-in failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Sign out and put every flow back at the upload screen. Requests still
    /// in flight are forgotten and their replies dropped.
    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(username = %user.username, "signed out");
        }
        self.session.clear();
        self.forget_document();
        self.transfer = None;
        self.auth_request = None;
        self.input = InputState::default();
        self.view = View::Upload;
    }

    fn forget_document(&mut self) {
        self.document_name = None;
        self.extracted_text.clear();
        self.input.path.clear();
    }

    fn expect_view(&self, view: View) -> Result<(), AppError> {
        if self.view == view {
            Ok(())
        } else {
            Err(AppError::WrongView(self.view))
        }
    }

    fn enter_taking(&mut self) {
        self.error = None;
        self.view = View::Taking;
        self.sync_highlight();
    }

    fn enter_results(&mut self) {
        debug_assert_eq!(self.session.phase(), Phase::Submitted);
        self.input.results_scroll = 0;
        self.view = View::Results;
    }

    /// Put the option cursor on the stored answer, or the first option.
    fn sync_highlight(&mut self) {
        self.input.highlighted = self
            .session
            .current_answer()
            .and_then(Answer::as_choice)
            .unwrap_or(0);
    }
}
