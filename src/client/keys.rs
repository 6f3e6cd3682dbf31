//! Keyboard handling. Keys either edit screen-local input state in place or
//! turn into an [`Action`] for the controller.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::input::{AuthForm, AuthMode, OptionsField};
use crate::app::{Action, App, View};
use crate::models::Answer;
use crate::session::PrimaryAction;

/// Returns the action to dispatch, if any.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control(app, key.code);
    }

    if key.code == KeyCode::Esc {
        if app.input.auth.take().is_some() {
            return None;
        }
        return app.error().map(|_| Action::DismissError);
    }

    if app.input.auth.is_some() {
        return handle_auth_input(app, key.code);
    }

    match app.view() {
        View::Upload => handle_upload_input(app, key.code),
        View::Options => handle_options_input(app, key.code),
        View::Loading => None,
        View::Preview => handle_preview_input(app, key.code),
        View::Taking => handle_quiz_input(app, key.code),
        View::Results => handle_results_input(app, key.code),
    }
}

fn handle_control(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('c') => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('l') if app.user().is_none() => {
            app.input.auth = Some(AuthForm::new(AuthMode::Login));
            None
        }
        KeyCode::Char('r') if app.user().is_none() => {
            app.input.auth = Some(AuthForm::new(AuthMode::Signup));
            None
        }
        KeyCode::Char('t') => {
            if let Some(form) = app.input.auth.as_mut() {
                form.switch_mode();
            }
            None
        }
        KeyCode::Char('o') if app.user().is_some() => Some(Action::Logout),
        _ => None,
    }
}

fn handle_auth_input(app: &mut App, code: KeyCode) -> Option<Action> {
    let waiting = app.is_authenticating();
    let form = app.input.auth.as_mut()?;

    match code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Enter if form.on_last_field() => {
            if !waiting {
                return Some(form.submit_action());
            }
        }
        KeyCode::Enter => form.focus_next(),
        KeyCode::Backspace => form.pop(),
        KeyCode::Char(c) => form.push(c),
        _ => {}
    }
    None
}

fn handle_upload_input(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter => {
            let path = app.input.path.trim();
            if path.is_empty() {
                None
            } else {
                Some(Action::SelectFile(PathBuf::from(path)))
            }
        }
        KeyCode::Backspace => {
            app.input.path.pop();
            None
        }
        KeyCode::Char(c) => {
            app.input.path.push(c);
            None
        }
        _ => None,
    }
}

fn handle_options_input(app: &mut App, code: KeyCode) -> Option<Action> {
    let options = *app.options();
    let field = app.input.options_field;

    match code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.input.options_field = field.next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            app.input.options_field = field.previous();
            None
        }
        KeyCode::Right | KeyCode::Char('l') => Some(match field {
            OptionsField::QuizType => Action::SetQuizType(options.quiz_type.next()),
            OptionsField::QuestionCount => {
                Action::SetQuestionCount(options.question_count().saturating_add(1))
            }
            OptionsField::Difficulty => Action::SetDifficulty(options.difficulty.next()),
        }),
        KeyCode::Left | KeyCode::Char('h') => Some(match field {
            OptionsField::QuizType => Action::SetQuizType(options.quiz_type.previous()),
            OptionsField::QuestionCount => {
                Action::SetQuestionCount(options.question_count().saturating_sub(1))
            }
            OptionsField::Difficulty => Action::SetDifficulty(options.difficulty.previous()),
        }),
        KeyCode::Enter => Some(Action::Generate),
        KeyCode::Char('u') => Some(Action::ChangeFile),
        _ => None,
    }
}

fn handle_preview_input(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('s') | KeyCode::Enter => Some(Action::StartQuiz),
        KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Down | KeyCode::Char('j') => {
            // Each question takes its prompt, its options and a blank line.
            let lines: usize = app
                .quiz()
                .map(|quiz| quiz.questions.iter().map(|q| q.options.len() + 2).sum())
                .unwrap_or(0);
            app.input.preview_scroll = (app.input.preview_scroll + 1).min(lines.saturating_sub(1));
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.input.preview_scroll = app.input.preview_scroll.saturating_sub(1);
            None
        }
        _ => None,
    }
}

fn handle_quiz_input(app: &mut App, code: KeyCode) -> Option<Action> {
    let session = app.session();
    let question = session.current_question()?;
    let affordances = session.affordances();
    let is_choice = question.kind.is_choice();
    let option_count = question.options.len();
    let typed = session
        .current_answer()
        .and_then(Answer::as_text)
        .unwrap_or("")
        .to_string();

    match code {
        KeyCode::Left if affordances.previous_enabled => return Some(Action::Previous),
        KeyCode::Right if affordances.primary == PrimaryAction::Next => {
            return Some(Action::Next);
        }
        KeyCode::Enter => {
            return Some(match affordances.primary {
                PrimaryAction::Next => Action::Next,
                PrimaryAction::Submit => Action::Submit,
            });
        }
        _ => {}
    }

    if is_choice {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.input.highlighted = app.input.highlighted.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if app.input.highlighted + 1 < option_count {
                    app.input.highlighted += 1;
                }
                None
            }
            KeyCode::Char(' ') => Some(Action::Answer(Answer::Choice(app.input.highlighted))),
            KeyCode::Char(c) => {
                let index = c.to_digit(10)? as usize;
                if (1..=option_count).contains(&index) {
                    app.input.highlighted = index - 1;
                    Some(Action::Answer(Answer::Choice(index - 1)))
                } else {
                    None
                }
            }
            _ => None,
        }
    } else {
        let mut text = typed;
        match code {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                text.pop()?;
            }
            _ => return None,
        }
        Some(Action::Answer(Answer::Text(text)))
    }
}

fn handle_results_input(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Retake),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewQuiz),
        KeyCode::Down | KeyCode::Char('j') => {
            let last = app.quiz().map(|quiz| quiz.len().saturating_sub(1)).unwrap_or(0);
            app.input.results_scroll = (app.input.results_scroll + 1).min(last);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.input.results_scroll = app.input.results_scroll.saturating_sub(1);
            None
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            None
        }
        _ => None,
    }
}
