use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::QuestionKind;

/// The quiz type sent to the generation service is the question kind every
/// generated question will have.
pub type QuizType = QuestionKind;

pub const MIN_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 20;
const DEFAULT_QUESTION_COUNT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty: {other} (expected easy, medium or hard)")),
        }
    }
}

impl QuestionKind {
    pub fn next(self) -> Self {
        match self {
            Self::MultipleChoice => Self::TrueFalse,
            Self::TrueFalse => Self::ShortAnswer,
            Self::ShortAnswer => Self::MultipleChoice,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::MultipleChoice => Self::ShortAnswer,
            Self::TrueFalse => Self::MultipleChoice,
            Self::ShortAnswer => Self::TrueFalse,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MultipleChoice => "multiple_choice",
            Self::TrueFalse => "true_false",
            Self::ShortAnswer => "short_answer",
        };
        f.write_str(name)
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "multiple_choice" | "mc" => Ok(Self::MultipleChoice),
            "true_false" | "tf" => Ok(Self::TrueFalse),
            "short_answer" | "sa" => Ok(Self::ShortAnswer),
            other => Err(format!(
                "unknown quiz type: {other} (expected multiple_choice, true_false or short_answer)"
            )),
        }
    }
}

/// Options the user picks before asking for a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
    pub quiz_type: QuizType,
    question_count: u32,
    pub difficulty: Difficulty,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            quiz_type: QuizType::MultipleChoice,
            question_count: DEFAULT_QUESTION_COUNT,
            difficulty: Difficulty::Medium,
        }
    }
}

impl QuizOptions {
    pub fn new(quiz_type: QuizType, question_count: u32, difficulty: Difficulty) -> Self {
        Self {
            quiz_type,
            question_count: clamp_count(question_count),
            difficulty,
        }
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Set the count, clamped to the supported range.
    pub fn set_question_count(&mut self, count: u32) {
        self.question_count = clamp_count(count);
    }
}

fn clamp_count(count: u32) -> u32 {
    count.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT)
}
