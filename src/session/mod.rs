//! Quiz-taking state machine.
//!
//! A session moves through `Idle → Previewing → Taking → Submitted` and
//! from `Submitted` either back into `Taking` (retake) or to `Idle` (new
//! quiz). The countdown only runs while `Taking` and is stopped on every
//! way out of it.

mod timer;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Answer, AnswerSet, Question, Quiz};
use crate::scoring::{self, ScoreReport};

pub use timer::{Countdown, Tick, TIME_LIMIT_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Previewing,
    Taking,
    Submitted,
}

/// Action invalid for the current phase or question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No questions generated. Please try again.")]
    EmptyQuiz,
    #[error("No quiz has been generated yet.")]
    NoQuiz,
    #[error("Cannot {action} while {phase:?}.")]
    WrongPhase { action: &'static str, phase: Phase },
    #[error("This quiz has already been submitted.")]
    AlreadySubmitted,
    #[error("Option {choice} does not exist for question {question}.")]
    OptionOutOfRange { question: usize, choice: usize },
    #[error("Question {question} does not take that kind of answer.")]
    AnswerKindMismatch { question: usize },
    #[error("Question {0} does not exist.")]
    NoSuchQuestion(usize),
}

/// Which navigation controls the current question offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub previous_enabled: bool,
    pub primary: PrimaryAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Submit,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    phase: Phase,
    quiz: Option<Quiz>,
    answers: AnswerSet,
    cursor: usize,
    timer: Countdown,
    report: Option<ScoreReport>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_timer(Countdown::default())
    }

    pub fn with_timer(timer: Countdown) -> Self {
        Self {
            phase: Phase::Idle,
            quiz: None,
            answers: AnswerSet::default(),
            cursor: 0,
            timer,
            report: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.as_ref().map_or(0, Quiz::len)
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Taking => self.quiz.as_ref()?.question(self.cursor),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(self.cursor)
    }

    /// Show a freshly generated quiz. Replaces any previous quiz wholesale.
    pub fn preview(&mut self, quiz: Quiz) -> Result<(), SessionError> {
        if self.phase == Phase::Taking {
            return Err(self.wrong_phase("load a new quiz"));
        }

        info!(questions = quiz.len(), file = %quiz.source_file_name, "quiz ready for preview");
        self.quiz = Some(quiz);
        self.answers = AnswerSet::default();
        self.cursor = 0;
        self.report = None;
        self.timer.stop();
        self.phase = Phase::Previewing;
        Ok(())
    }

    /// Begin an attempt on the previewed quiz.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Previewing {
            return Err(self.wrong_phase("start the quiz"));
        }
        self.begin_attempt()
    }

    pub fn record_answer(&mut self, answer: Answer) -> Result<(), SessionError> {
        self.record_answer_at(self.cursor, answer)
    }

    pub fn record_answer_at(&mut self, index: usize, answer: Answer) -> Result<(), SessionError> {
        if self.phase != Phase::Taking {
            return Err(self.wrong_phase("answer"));
        }
        let quiz = self.quiz.as_ref().ok_or(SessionError::NoQuiz)?;
        let question = quiz
            .question(index)
            .ok_or(SessionError::NoSuchQuestion(index))?;

        match (&answer, question.kind.is_choice()) {
            (Answer::Choice(choice), true) if *choice >= question.options.len() => {
                return Err(SessionError::OptionOutOfRange {
                    question: index,
                    choice: *choice,
                });
            }
            (Answer::Choice(_), true) | (Answer::Text(_), false) => {}
            _ => return Err(SessionError::AnswerKindMismatch { question: index }),
        }

        self.answers.set(index, answer);
        Ok(())
    }

    /// Move to the next question; stays put on the last one.
    pub fn advance(&mut self) -> Result<usize, SessionError> {
        if self.phase != Phase::Taking {
            return Err(self.wrong_phase("move to the next question"));
        }
        if self.cursor + 1 < self.total_questions() {
            self.cursor += 1;
        }
        Ok(self.cursor)
    }

    /// Move to the previous question; stays put on the first one.
    pub fn retreat(&mut self) -> Result<usize, SessionError> {
        if self.phase != Phase::Taking {
            return Err(self.wrong_phase("move to the previous question"));
        }
        self.cursor = self.cursor.saturating_sub(1);
        Ok(self.cursor)
    }

    pub fn affordances(&self) -> Affordances {
        let last = self.total_questions().saturating_sub(1);
        Affordances {
            previous_enabled: self.cursor > 0,
            primary: if self.cursor >= last {
                PrimaryAction::Submit
            } else {
                PrimaryAction::Next
            },
        }
    }

    /// Manual submission.
    pub fn submit(&mut self) -> Result<&ScoreReport, SessionError> {
        self.finish(false)
    }

    /// Advance the countdown by one second. Returns the report when this
    /// tick ran the clock out and forced a submission.
    pub fn tick(&mut self) -> Option<&ScoreReport> {
        if self.phase != Phase::Taking {
            return None;
        }

        match self.timer.tick() {
            Tick::Expired => {
                info!("time is up, submitting");
                self.finish(true).ok()
            }
            Tick::Running(remaining) => {
                debug!(remaining, "tick");
                None
            }
            Tick::Idle => None,
        }
    }

    /// Take the same quiz again with a clean answer sheet and a full clock.
    pub fn retake(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Submitted {
            return Err(self.wrong_phase("retake the quiz"));
        }
        self.begin_attempt()
    }

    /// Drop the quiz after viewing results.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Submitted {
            return Err(self.wrong_phase("start a new quiz"));
        }
        self.clear();
        Ok(())
    }

    /// Tear everything down regardless of phase.
    pub fn clear(&mut self) {
        self.timer.stop();
        self.quiz = None;
        self.answers = AnswerSet::default();
        self.cursor = 0;
        self.report = None;
        self.phase = Phase::Idle;
    }

    fn begin_attempt(&mut self) -> Result<(), SessionError> {
        let quiz = self.quiz.as_ref().ok_or(SessionError::NoQuiz)?;
        if quiz.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }

        self.answers = AnswerSet::unset(quiz.len());
        self.cursor = 0;
        self.report = None;
        self.timer.start();
        self.phase = Phase::Taking;
        info!(questions = quiz.len(), "attempt started");
        Ok(())
    }

    fn finish(&mut self, forced: bool) -> Result<&ScoreReport, SessionError> {
        match self.phase {
            Phase::Taking => {}
            Phase::Submitted => return Err(SessionError::AlreadySubmitted),
            _ => return Err(self.wrong_phase("submit")),
        }

        self.timer.stop();
        self.phase = Phase::Submitted;

        let quiz = self.quiz.as_ref().ok_or(SessionError::NoQuiz)?;
        let report = scoring::report(quiz, &self.answers, forced);
        info!(
            correct = report.score.correct,
            total = report.score.total,
            forced,
            "attempt submitted"
        );
        Ok(self.report.insert(report))
    }

    fn wrong_phase(&self, action: &'static str) -> SessionError {
        SessionError::WrongPhase {
            action,
            phase: self.phase,
        }
    }
}
