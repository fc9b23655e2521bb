use quiz_core::model::{OptionId, QuestionId};
use quiz_core::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    /// 1-based position shown next to the question text.
    pub number: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionVm>,
    pub answered: usize,
    pub total: usize,
    pub can_submit: bool,
}

impl QuizVm {
    /// Build the quiz screen model. `None` when the session holds no quiz.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        let quiz = state.quiz()?;
        let answers = state.answers();
        let questions = quiz
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = answers.selected(question.id());
                QuestionVm {
                    id: question.id().clone(),
                    number: index + 1,
                    text: question.text().to_string(),
                    options: question
                        .options()
                        .iter()
                        .map(|option| OptionVm {
                            id: option.id().clone(),
                            text: option.text().to_string(),
                            selected: selected == Some(option.id()),
                        })
                        .collect(),
                }
            })
            .collect();
        let (answered, total) = state.progress();

        Some(Self {
            title: quiz.title().to_string(),
            description: quiz.description().to_string(),
            questions,
            answered,
            total,
            can_submit: state.can_submit(),
        })
    }
}
