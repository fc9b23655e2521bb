use thiserror::Error;

use crate::scoring::{Grade, QuizOutcome};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("attempt username cannot be empty")]
    EmptyUsername,

    #[error("attempt must cover at least one question")]
    NoQuestions,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Durable outcome of one submitted quiz.
///
/// Created once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    username: String,
    topic: String,
    score: u32,
    total_questions: u32,
    timestamp_ms: i64,
}

impl AttemptRecord {
    /// Rehydrate an attempt from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` if the username is blank, the total is zero or the
    /// score exceeds the total.
    pub fn from_persisted(
        username: impl Into<String>,
        topic: impl Into<String>,
        score: u32,
        total_questions: u32,
        timestamp_ms: i64,
    ) -> Result<Self, AttemptError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(AttemptError::EmptyUsername);
        }
        if total_questions == 0 {
            return Err(AttemptError::NoQuestions);
        }
        if score > total_questions {
            return Err(AttemptError::ScoreExceedsTotal {
                score,
                total: total_questions,
            });
        }

        Ok(Self {
            username,
            topic: topic.into(),
            score,
            total_questions,
            timestamp_ms,
        })
    }

    /// Build the record for a freshly scored quiz.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AttemptRecord::from_persisted`].
    pub fn from_outcome(
        username: impl Into<String>,
        topic: impl Into<String>,
        outcome: &QuizOutcome,
        timestamp_ms: i64,
    ) -> Result<Self, AttemptError> {
        Self::from_persisted(
            username,
            topic,
            outcome.score(),
            outcome.total(),
            timestamp_ms,
        )
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Epoch milliseconds at submission.
    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score, self.total_questions)
    }
}
