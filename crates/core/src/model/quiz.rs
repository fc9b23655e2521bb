use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {question} has no options")]
    NoOptions { question: QuestionId },

    #[error("question {question} lists option {option} more than once")]
    DuplicateOption {
        question: QuestionId,
        option: OptionId,
    },

    #[error("question {question} marks unknown option {option} as correct")]
    UnknownCorrectOption {
        question: QuestionId,
        option: OptionId,
    },

    #[error("question id {question} is used more than once")]
    DuplicateQuestion { question: QuestionId },
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    id: OptionId,
    text: String,
}

impl QuizOption {
    #[must_use]
    pub fn new(id: OptionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<QuizOption>,
    correct_option_id: OptionId,
}

impl Question {
    /// Build a question, checking that option ids are unique and that the
    /// correct option is one of them.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoOptions` for an empty option list,
    /// `QuizError::DuplicateOption` when two options share an id and
    /// `QuizError::UnknownCorrectOption` when the correct id matches no option.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<QuizOption>,
        correct_option_id: OptionId,
    ) -> Result<Self, QuizError> {
        if options.is_empty() {
            return Err(QuizError::NoOptions { question: id });
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.id()) {
                return Err(QuizError::DuplicateOption {
                    question: id,
                    option: option.id().clone(),
                });
            }
        }

        if !seen.contains(&correct_option_id) {
            return Err(QuizError::UnknownCorrectOption {
                question: id,
                option: correct_option_id,
            });
        }

        Ok(Self {
            id,
            text: text.into(),
            options,
            correct_option_id,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_option_id(&self) -> &OptionId {
        &self.correct_option_id
    }

    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id() == id)
    }

    #[must_use]
    pub fn has_option(&self, id: &OptionId) -> bool {
        self.option(id).is_some()
    }

    #[must_use]
    pub fn is_correct(&self, id: &OptionId) -> bool {
        self.correct_option_id == *id
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// An ordered set of questions with a title and description.
///
/// A quiz may be empty; callers that need at least one question check
/// [`Quiz::is_empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    description: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError::DuplicateQuestion` if two questions share an id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuizError::DuplicateQuestion {
                    question: question.id().clone(),
                });
            }
        }

        Ok(Self {
            title: title.into(),
            description: description.into(),
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
