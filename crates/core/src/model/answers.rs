use std::collections::BTreeMap;

use crate::model::ids::{OptionId, QuestionId};
use crate::model::quiz::Quiz;

/// The user's in-progress selections, one option per question.
///
/// Re-selecting a question replaces the previous choice; entries are never
/// removed individually.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    selections: BTreeMap<QuestionId, OptionId>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` for `question`, returning the replaced selection if any.
    pub fn select(&mut self, question: QuestionId, option: OptionId) -> Option<OptionId> {
        self.selections.insert(question, option)
    }

    #[must_use]
    pub fn selected(&self, question: &QuestionId) -> Option<&OptionId> {
        self.selections.get(question)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// True when every question of `quiz` has a selection.
    #[must_use]
    pub fn covers(&self, quiz: &Quiz) -> bool {
        quiz.questions()
            .iter()
            .all(|question| self.selections.contains_key(question.id()))
    }
}
