//! Local scoring of a finished attempt.
//!
//! Choice questions are scored by exact index equality. Short-answer
//! questions count as correct whenever the answer contains any non-blank
//! text; the backend provides no answer key for them.

use crate::models::{Answer, AnswerSet, Question, Quiz};

/// Number of correct answers out of the quiz length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn tier(&self) -> Tier {
        Tier::for_score(self.correct, self.total)
    }
}

/// Performance band shown with the score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    NeedsPractice,
    Fair,
    Good,
    Excellent,
}

impl Tier {
    /// Integer comparison so that e.g. 4/5 lands exactly on 80%.
    pub fn for_score(correct: usize, total: usize) -> Self {
        let scaled = correct * 100;
        if total == 0 {
            Self::NeedsPractice
        } else if scaled >= total * 80 {
            Self::Excellent
        } else if scaled >= total * 60 {
            Self::Good
        } else if scaled >= total * 40 {
            Self::Fair
        } else {
            Self::NeedsPractice
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You have mastered this material.",
            Self::Good => "Good job! You have a solid understanding.",
            Self::Fair => "Not bad! Review the material and try again.",
            Self::NeedsPractice => "Keep studying! You'll get better with practice.",
        }
    }
}

/// Outcome for one question in the breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub index: usize,
    pub answered: bool,
    pub correct: bool,
}

/// Everything the results screen needs about a submitted attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub score: Score,
    pub outcomes: Vec<QuestionOutcome>,
    /// True when the attempt was submitted by the timer running out.
    pub forced: bool,
}

impl ScoreReport {
    pub fn percentage(&self) -> f64 {
        self.score.percentage()
    }

    pub fn tier(&self) -> Tier {
        self.score.tier()
    }

    pub fn message(&self) -> &'static str {
        self.tier().message()
    }
}

pub fn is_correct(question: &Question, answer: Option<&Answer>) -> bool {
    if question.kind.is_choice() {
        match (answer.and_then(Answer::as_choice), question.correct_answer) {
            (Some(chosen), Some(expected)) => chosen == expected,
            _ => false,
        }
    } else {
        answer
            .and_then(Answer::as_text)
            .is_some_and(|text| !text.trim().is_empty())
    }
}

pub fn score(quiz: &Quiz, answers: &AnswerSet) -> Score {
    let correct = quiz
        .questions
        .iter()
        .enumerate()
        .filter(|(index, question)| is_correct(question, answers.get(*index)))
        .count();

    Score {
        correct,
        total: quiz.len(),
    }
}

/// Score the attempt and build the per-question breakdown.
pub fn report(quiz: &Quiz, answers: &AnswerSet, forced: bool) -> ScoreReport {
    let outcomes = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answer = answers.get(index);
            QuestionOutcome {
                index,
                answered: answer.is_some_and(|answer| !answer.is_blank()),
                correct: is_correct(question, answer),
            }
        })
        .collect();

    ScoreReport {
        score: score(quiz, answers),
        outcomes,
        forced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    fn mc(correct: usize) -> Question {
        let options = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        Question::choice(QuestionKind::MultipleChoice, "Pick", options, correct).unwrap()
    }

    fn quiz(questions: Vec<Question>) -> Quiz {
        Quiz::new("notes.pdf", "text", questions)
    }

    #[test]
    fn test_two_of_three_is_good() {
        let quiz = quiz(vec![mc(1), mc(0), mc(2)]);
        let answers = AnswerSet::from_slots(vec![
            Some(Answer::Choice(1)),
            Some(Answer::Choice(0)),
            Some(Answer::Choice(1)),
        ]);

        let score = score(&quiz, &answers);
        assert_eq!(score, Score { correct: 2, total: 3 });
        assert!((score.percentage() - 66.666).abs() < 0.01);
        assert_eq!(score.tier(), Tier::Good);
        assert_eq!(score.tier().message(), "Good job! You have a solid understanding.");
    }

    #[test]
    fn test_tier_boundaries_belong_to_upper_tier() {
        assert_eq!(Tier::for_score(4, 5), Tier::Excellent);
        assert_eq!(Tier::for_score(3, 5), Tier::Good);
        assert_eq!(Tier::for_score(2, 5), Tier::Fair);
        assert_eq!(Tier::for_score(1, 5), Tier::NeedsPractice);
        assert_eq!(Tier::for_score(5, 5), Tier::Excellent);
        assert_eq!(Tier::for_score(0, 5), Tier::NeedsPractice);
    }

    #[test]
    fn test_just_below_eighty_is_good() {
        // 7999 / 10000 = 79.99%
        assert_eq!(Tier::for_score(7999, 10000), Tier::Good);
        assert_eq!(Tier::for_score(8000, 10000), Tier::Excellent);
        assert_eq!(Tier::for_score(5999, 10000), Tier::Fair);
        assert_eq!(Tier::for_score(3999, 10000), Tier::NeedsPractice);
    }

    #[test]
    fn test_short_answer_counts_any_non_blank_text() {
        let quiz = quiz(vec![
            Question::short_answer("Explain", None),
            Question::short_answer("Explain", None),
            Question::short_answer("Explain", None),
        ]);
        let answers = AnswerSet::from_slots(vec![
            Some(Answer::Text("anything".to_string())),
            Some(Answer::Text("   \t".to_string())),
            None,
        ]);

        assert_eq!(score(&quiz, &answers).correct, 1);
    }

    #[test]
    fn test_wrong_shape_never_counts() {
        let quiz = quiz(vec![mc(0), Question::short_answer("Explain", None)]);
        let answers = AnswerSet::from_slots(vec![
            Some(Answer::Text("0".to_string())),
            Some(Answer::Choice(0)),
        ]);

        assert_eq!(score(&quiz, &answers).correct, 0);
    }

    #[test]
    fn test_report_breakdown() {
        let quiz = quiz(vec![mc(0), mc(1)]);
        let answers = AnswerSet::from_slots(vec![Some(Answer::Choice(0)), None]);

        let report = report(&quiz, &answers, true);
        assert!(report.forced);
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcomes[0].answered && report.outcomes[0].correct);
        assert!(!report.outcomes[1].answered && !report.outcomes[1].correct);
        assert_eq!(report.tier(), Tier::Fair);
    }

    #[test]
    fn test_cleared_text_is_unanswered() {
        let quiz = quiz(vec![
            Question::short_answer("Explain", None),
            Question::short_answer("Explain", None),
        ]);
        let answers = AnswerSet::from_slots(vec![
            Some(Answer::Text(String::new())),
            Some(Answer::Text("  ".to_string())),
        ]);

        let report = report(&quiz, &answers, false);
        assert!(report.outcomes.iter().all(|o| !o.answered && !o.correct));
        assert_eq!(answers.answered_count(), 0);
    }

    #[test]
    fn test_unanswered_quiz_scores_zero() {
        let quiz = quiz(vec![mc(0), mc(1), mc(2)]);
        let report = report(&quiz, &AnswerSet::unset(3), true);
        assert_eq!(report.score.correct, 0);
        assert_eq!(report.tier(), Tier::NeedsPractice);
    }
}
