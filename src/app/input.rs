//! Screen-local input state: text buffers, focus and scroll positions that
//! the key handler edits before turning them into [`Action`]s.

use super::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionsField {
    #[default]
    QuizType,
    QuestionCount,
    Difficulty,
}

impl OptionsField {
    pub fn next(self) -> Self {
        match self {
            Self::QuizType => Self::QuestionCount,
            Self::QuestionCount => Self::Difficulty,
            Self::Difficulty => Self::QuizType,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::QuizType => Self::Difficulty,
            Self::QuestionCount => Self::QuizType,
            Self::Difficulty => Self::QuestionCount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Email,
    Password,
}

const LOGIN_FIELDS: [AuthField; 2] = [AuthField::Username, AuthField::Password];
const SIGNUP_FIELDS: [AuthField; 3] = [AuthField::Username, AuthField::Email, AuthField::Password];

/// The login / sign-up form shown over the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub focus: AuthField,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            focus: AuthField::Username,
        }
    }

    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &LOGIN_FIELDS,
            AuthMode::Signup => &SIGNUP_FIELDS,
        }
    }

    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        if !self.fields().contains(&self.focus) {
            self.focus = AuthField::Username;
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let at = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(at + 1) % fields.len()];
    }

    pub fn focus_previous(&mut self) {
        let fields = self.fields();
        let at = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(at + fields.len() - 1) % fields.len()];
    }

    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop(&mut self) {
        self.focused_mut().pop();
    }

    /// True when the focused field is the last one, so Enter submits.
    pub fn on_last_field(&self) -> bool {
        self.fields().last() == Some(&self.focus)
    }

    pub fn submit_action(&self) -> Action {
        match self.mode {
            AuthMode::Login => Action::Login {
                username: self.username.trim().to_string(),
                password: self.password.clone(),
            },
            AuthMode::Signup => Action::Register {
                username: self.username.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            },
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Path typed on the upload screen.
    pub path: String,
    /// Option under the cursor on a choice question.
    pub highlighted: usize,
    pub options_field: OptionsField,
    pub preview_scroll: usize,
    pub results_scroll: usize,
    pub auth: Option<AuthForm>,
}
