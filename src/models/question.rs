use serde::{Deserialize, Serialize};

/// The three question shapes the generation service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl QuestionKind {
    /// Choice kinds are answered by picking an option index.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::MultipleChoice | Self::TrueFalse)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple choice",
            Self::TrueFalse => "True / False",
            Self::ShortAnswer => "Short answer",
        }
    }
}

/// A single generated question. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_guide: Option<String>,
}

impl Question {
    /// Build a choice question, checking that the correct index points at
    /// one of the options.
    pub fn choice(
        kind: QuestionKind,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
    ) -> Result<Self, String> {
        if !kind.is_choice() {
            return Err(format!("{:?} is not a choice question", kind));
        }
        if options.is_empty() {
            return Err("choice question has no options".to_string());
        }
        if correct_answer >= options.len() {
            return Err(format!(
                "correct answer {} is out of range for {} options",
                correct_answer,
                options.len()
            ));
        }

        Ok(Self {
            id: None,
            prompt: prompt.into(),
            kind,
            options,
            correct_answer: Some(correct_answer),
            answer_guide: None,
        })
    }

    pub fn short_answer(prompt: impl Into<String>, answer_guide: Option<String>) -> Self {
        Self {
            id: None,
            prompt: prompt.into(),
            kind: QuestionKind::ShortAnswer,
            options: Vec::new(),
            correct_answer: None,
            answer_guide,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

/// A generated quiz together with the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    pub source_file_name: String,
    #[serde(skip)]
    pub source_text: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(
        source_file_name: impl Into<String>,
        source_text: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            source_file_name: source_file_name.into(),
            source_text: source_text.into(),
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_choice_rejects_out_of_range_answer() {
        let result = Question::choice(
            QuestionKind::MultipleChoice,
            "Pick one",
            options(&["a", "b"]),
            2,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_choice_rejects_short_answer_kind() {
        let result = Question::choice(QuestionKind::ShortAnswer, "Why?", options(&["a"]), 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_true_false_question() {
        let q = Question::choice(
            QuestionKind::TrueFalse,
            "The sky is blue.",
            options(&["True", "False"]),
            0,
        )
        .unwrap()
        .with_id(3);

        assert_eq!(q.id, Some(3));
        assert_eq!(q.correct_answer, Some(0));
        assert!(q.kind.is_choice());
    }

    #[test]
    fn test_short_answer_has_no_options() {
        let q = Question::short_answer("Summarise the text", Some("main points".to_string()));
        assert!(q.options.is_empty());
        assert_eq!(q.correct_answer, None);
        assert!(!q.kind.is_choice());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionKind::TrueFalse).unwrap();
        assert_eq!(json, "\"true_false\"");
    }
}
