//! Domain types shared by the controller, the scoring engine and the
//! backend client.

mod answer;
mod options;
mod question;
mod user;

pub use answer::{Answer, AnswerSet};
pub use options::{Difficulty, QuizOptions, QuizType, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};
pub use question::{Question, QuestionKind, Quiz};
pub use user::User;
