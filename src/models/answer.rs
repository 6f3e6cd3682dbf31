use serde::Serialize;

/// What the user put in for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// Index of the chosen option.
    Choice(usize),
    /// Free text for short-answer questions.
    Text(String),
}

impl Answer {
    pub fn as_choice(&self) -> Option<usize> {
        match self {
            Self::Choice(index) => Some(*index),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Choice(_) => None,
        }
    }

    /// Text that is empty once trimmed counts as no answer.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

/// Answers for one attempt, index-aligned with the quiz questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    slots: Vec<Option<Answer>>,
}

impl AnswerSet {
    /// An all-unset set sized for `len` questions.
    pub fn unset(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn from_slots(slots: Vec<Option<Answer>>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Overwrite a slot. Returns false if the index is out of range.
    pub fn set(&mut self, index: usize, answer: Answer) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(answer);
                true
            }
            None => false,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|answer| !answer.is_blank())
            .count()
    }

    pub fn is_all_unset(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_set_is_sized() {
        let answers = AnswerSet::unset(4);
        assert_eq!(answers.len(), 4);
        assert!(answers.is_all_unset());
        assert_eq!(answers.answered_count(), 0);
    }

    #[test]
    fn test_set_overwrites_slot() {
        let mut answers = AnswerSet::unset(2);
        assert!(answers.set(1, Answer::Choice(0)));
        assert!(answers.set(1, Answer::Choice(3)));
        assert_eq!(answers.get(1), Some(&Answer::Choice(3)));
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut answers = AnswerSet::unset(1);
        assert!(!answers.set(1, Answer::Text("late".to_string())));
        assert!(answers.is_all_unset());
    }
}
