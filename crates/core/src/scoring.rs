use std::fmt;

use crate::model::{AnswerSet, OptionId, QuestionId, Quiz};

//
// ─── GRADE ─────────────────────────────────────────────────────────────────────
//

/// Percentage score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    /// `round(score / total * 100)`, rounding halves up. A zero total grades as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_score(score: u32, total: u32) -> Self {
        if total == 0 {
            return Self(0);
        }
        let ratio = f64::from(score) / f64::from(total);
        let percent = (ratio * 100.0).round().clamp(0.0, 100.0);
        Self(percent as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn band(self) -> GradeBand {
        match self.0 {
            80.. => GradeBand::High,
            60..=79 => GradeBand::Medium,
            _ => GradeBand::Low,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse bucket used to colour grades in the history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    /// 80 and above.
    High,
    /// 60 to 79.
    Medium,
    /// Below 60.
    Low,
}

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// How a single question was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub question_id: QuestionId,
    pub selected: Option<OptionId>,
    pub correct: OptionId,
    pub is_correct: bool,
}

/// Score, grade and per-question review of a submitted answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    score: u32,
    total: u32,
    reviews: Vec<QuestionReview>,
}

impl QuizOutcome {
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score, self.total)
    }

    #[must_use]
    pub fn reviews(&self) -> &[QuestionReview] {
        &self.reviews
    }

    #[must_use]
    pub fn review(&self, question: &QuestionId) -> Option<&QuestionReview> {
        self.reviews
            .iter()
            .find(|review| review.question_id == *question)
    }
}

/// Number of questions whose selected option is the correct one.
#[must_use]
pub fn score(quiz: &Quiz, answers: &AnswerSet) -> u32 {
    quiz.questions()
        .iter()
        .filter(|question| {
            answers
                .selected(question.id())
                .is_some_and(|selected| question.is_correct(selected))
        })
        .fold(0_u32, |count, _| count.saturating_add(1))
}

/// Score `answers` against `quiz`. Unanswered questions count as incorrect.
#[must_use]
pub fn evaluate(quiz: &Quiz, answers: &AnswerSet) -> QuizOutcome {
    let reviews: Vec<QuestionReview> = quiz
        .questions()
        .iter()
        .map(|question| {
            let selected = answers.selected(question.id()).cloned();
            let is_correct = selected
                .as_ref()
                .is_some_and(|option| question.is_correct(option));
            QuestionReview {
                question_id: question.id().clone(),
                selected,
                correct: question.correct_option_id().clone(),
                is_correct,
            }
        })
        .collect();

    QuizOutcome {
        score: score(quiz, answers),
        total: u32::try_from(quiz.total_questions()).unwrap_or(u32::MAX),
        reviews,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
