use quiz_core::model::OptionId;
use quiz_core::scoring::GradeBand;
use quiz_core::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub number: usize,
    pub question: String,
    pub selected: Option<String>,
    pub correct: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub grade: u8,
    pub band_class: &'static str,
    pub score: u32,
    pub total: u32,
    pub reviews: Vec<ReviewVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        let quiz = state.quiz()?;
        let outcome = state.outcome()?;

        let reviews = quiz
            .questions()
            .iter()
            .enumerate()
            .filter_map(|(index, question)| {
                let review = outcome.review(question.id())?;
                let option_text =
                    |id: &OptionId| question.option(id).map(|option| option.text().to_string());
                Some(ReviewVm {
                    number: index + 1,
                    question: question.text().to_string(),
                    selected: review.selected.as_ref().and_then(option_text),
                    correct: option_text(&review.correct).unwrap_or_default(),
                    is_correct: review.is_correct,
                })
            })
            .collect();

        Some(Self {
            grade: outcome.grade().value(),
            band_class: band_class(outcome.grade().band()),
            score: outcome.score(),
            total: outcome.total(),
            reviews,
        })
    }
}

/// CSS class for a grade band.
#[must_use]
pub fn band_class(band: GradeBand) -> &'static str {
    match band {
        GradeBand::High => "grade-high",
        GradeBand::Medium => "grade-medium",
        GradeBand::Low => "grade-low",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Question, QuestionId, Quiz, QuizOption, UserIdentity};
    use std::sync::Arc;

    #[test]
    fn wrong_answer_shows_both_choices() {
        let question = Question::new(
            QuestionId::new("q1").unwrap(),
            "which?",
            vec![
                QuizOption::new(OptionId::new("a").unwrap(), "right"),
                QuizOption::new(OptionId::new("b").unwrap(), "wrong"),
            ],
            OptionId::new("a").unwrap(),
        )
        .unwrap();
        let quiz = Quiz::new("t", "d", vec![question]).unwrap();
        let (state, _) = SessionState::new("topic")
            .begin_loading(UserIdentity::entered("dana").unwrap())
            .unwrap()
            .quiz_loaded(Arc::new(quiz))
            .select(&QuestionId::new("q1").unwrap(), &OptionId::new("b").unwrap())
            .unwrap()
            .submit(0)
            .unwrap();

        let vm = ResultsVm::from_state(&state).unwrap();
        assert_eq!(vm.grade, 0);
        assert_eq!(vm.band_class, "grade-low");
        assert_eq!(vm.reviews.len(), 1);
        assert_eq!(vm.reviews[0].selected.as_deref(), Some("wrong"));
        assert_eq!(vm.reviews[0].correct, "right");
        assert!(!vm.reviews[0].is_correct);
    }

    #[test]
    fn bands_map_to_classes() {
        assert_eq!(band_class(GradeBand::High), "grade-high");
        assert_eq!(band_class(GradeBand::Medium), "grade-medium");
        assert_eq!(band_class(GradeBand::Low), "grade-low");
    }
}
