//! Screen state machine for a quiz session.
//!
//! [`SessionState`] is an immutable snapshot. Every transition borrows the
//! current snapshot and returns the next one, so callers decide when (and
//! whether) to commit it. Transitions that are not allowed from the current
//! screen return `None` and leave the caller's snapshot untouched.

use std::sync::Arc;

use crate::model::{AnswerSet, AttemptRecord, OptionId, QuestionId, Quiz, UserIdentity};
use crate::scoring::{QuizOutcome, evaluate};

/// The screen a session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Loading,
    Quiz,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    screen: Screen,
    topic: String,
    identity: Option<UserIdentity>,
    quiz: Option<Arc<Quiz>>,
    answers: AnswerSet,
    outcome: Option<QuizOutcome>,
    load_error: bool,
}

impl SessionState {
    /// Fresh session on the auth screen with no identity.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            screen: Screen::Auth,
            topic: topic.into(),
            identity: None,
            quiz: None,
            answers: AnswerSet::new(),
            outcome: None,
            load_error: false,
        }
    }

    /// Attach an identity restored at startup.
    #[must_use]
    pub fn with_identity(mut self, identity: UserIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    /// True when the identity was auto-restored and the auth form is read-only.
    #[must_use]
    pub fn is_identity_locked(&self) -> bool {
        self.identity.as_ref().is_some_and(UserIdentity::is_locked)
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_deref()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Set after a failed quiz fetch; cleared by the next successful start.
    #[must_use]
    pub fn load_error(&self) -> bool {
        self.load_error
    }

    /// Answered and total question counts of the active quiz.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.quiz.as_ref().map_or(0, |quiz| quiz.total_questions());
        (self.answers.len(), total)
    }

    /// Submission is possible only on the quiz screen once every question is answered.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        if self.screen != Screen::Quiz {
            return false;
        }
        let Some(quiz) = self.quiz.as_ref() else {
            return false;
        };
        !quiz.is_empty() && self.answers.len() >= quiz.total_questions() && self.answers.covers(quiz)
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Auth → Loading for `identity`.
    ///
    /// Also accepted from `Loading` so that a fetch abandoned midway can be
    /// started again; callers guarantee only one fetch runs at a time.
    #[must_use]
    pub fn begin_loading(&self, identity: UserIdentity) -> Option<Self> {
        if !matches!(self.screen, Screen::Auth | Screen::Loading) {
            return None;
        }
        Some(Self {
            screen: Screen::Loading,
            identity: Some(identity),
            quiz: None,
            answers: AnswerSet::new(),
            outcome: None,
            load_error: false,
            ..self.clone()
        })
    }

    /// Loading → Quiz. An empty quiz is treated as a failed fetch.
    ///
    /// No-op outside `Loading`.
    #[must_use]
    pub fn quiz_loaded(&self, quiz: Arc<Quiz>) -> Self {
        if self.screen != Screen::Loading {
            return self.clone();
        }
        if quiz.is_empty() {
            return self.quiz_failed();
        }
        Self {
            screen: Screen::Quiz,
            quiz: Some(quiz),
            answers: AnswerSet::new(),
            ..self.clone()
        }
    }

    /// Loading → Auth with the load error flag set. No-op outside `Loading`.
    #[must_use]
    pub fn quiz_failed(&self) -> Self {
        if self.screen != Screen::Loading {
            return self.clone();
        }
        Self {
            screen: Screen::Auth,
            quiz: None,
            load_error: true,
            ..self.clone()
        }
    }

    /// Record a selection on the quiz screen. Unknown question/option pairs are rejected.
    #[must_use]
    pub fn select(&self, question: &QuestionId, option: &OptionId) -> Option<Self> {
        if self.screen != Screen::Quiz {
            return None;
        }
        let known = self
            .quiz
            .as_ref()
            .and_then(|quiz| quiz.question(question))
            .is_some_and(|q| q.has_option(option));
        if !known {
            return None;
        }

        let mut next = self.clone();
        next.answers.select(question.clone(), option.clone());
        Some(next)
    }

    /// Quiz → Results, producing the attempt to persist.
    ///
    /// Returns `None` while [`SessionState::can_submit`] is false.
    #[must_use]
    pub fn submit(&self, timestamp_ms: i64) -> Option<(Self, AttemptRecord)> {
        if !self.can_submit() {
            return None;
        }
        let quiz = self.quiz.as_ref()?;
        let identity = self.identity.as_ref()?;
        let outcome = evaluate(quiz, &self.answers);
        // A non-empty quiz and a validated identity always yield a valid record.
        let built =
            AttemptRecord::from_outcome(identity.username(), &self.topic, &outcome, timestamp_ms);
        debug_assert!(built.is_ok(), "scored attempt broke record invariants: {built:?}");
        let record = built.ok()?;

        let next = Self {
            screen: Screen::Results,
            outcome: Some(outcome),
            ..self.clone()
        };
        Some((next, record))
    }

    /// Results → Auth. Drops the quiz and answers, keeps the identity.
    #[must_use]
    pub fn reset(&self) -> Option<Self> {
        if self.screen != Screen::Results {
            return None;
        }
        Some(Self {
            screen: Screen::Auth,
            quiz: None,
            answers: AnswerSet::new(),
            outcome: None,
            load_error: false,
            ..self.clone()
        })
    }

    /// Any screen → Auth with no identity.
    #[must_use]
    pub fn logout(&self) -> Self {
        Self {
            screen: Screen::Auth,
            identity: None,
            quiz: None,
            answers: AnswerSet::new(),
            outcome: None,
            load_error: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuizOption};

    fn quiz(questions: usize) -> Arc<Quiz> {
        let questions = (1..=questions)
            .map(|n| {
                Question::new(
                    QuestionId::new(format!("q{n}")).unwrap(),
                    "?",
                    vec![
                        QuizOption::new(OptionId::new("o1").unwrap(), "yes"),
                        QuizOption::new(OptionId::new("o2").unwrap(), "no"),
                    ],
                    OptionId::new("o1").unwrap(),
                )
                .unwrap()
            })
            .collect();
        Arc::new(Quiz::new("Quiz", "About", questions).unwrap())
    }

    fn qid(n: usize) -> QuestionId {
        QuestionId::new(format!("q{n}")).unwrap()
    }

    fn oid(id: &str) -> OptionId {
        OptionId::new(id).unwrap()
    }

    fn in_quiz(questions: usize) -> SessionState {
        SessionState::new("foxes")
            .begin_loading(UserIdentity::entered("dana").unwrap())
            .unwrap()
            .quiz_loaded(quiz(questions))
    }

    #[test]
    fn start_moves_through_loading_to_quiz() {
        let loading = SessionState::new("foxes")
            .begin_loading(UserIdentity::entered("dana").unwrap())
            .unwrap();
        assert_eq!(loading.screen(), Screen::Loading);

        let active = loading.quiz_loaded(quiz(3));
        assert_eq!(active.screen(), Screen::Quiz);
        assert_eq!(active.progress(), (0, 3));
        assert!(!active.load_error());
    }

    #[test]
    fn empty_quiz_falls_back_to_auth_with_error() {
        let state = SessionState::new("foxes")
            .begin_loading(UserIdentity::entered("dana").unwrap())
            .unwrap()
            .quiz_loaded(quiz(0));
        assert_eq!(state.screen(), Screen::Auth);
        assert!(state.load_error());
        assert!(state.quiz().is_none());
        assert_eq!(state.identity().map(UserIdentity::username), Some("dana"));
    }

    #[test]
    fn submit_is_blocked_until_every_question_is_answered() {
        let mut state = in_quiz(3);
        for n in 1..=2 {
            state = state.select(&qid(n), &oid("o1")).unwrap();
            assert!(!state.can_submit());
            assert!(state.submit(0).is_none());
        }
        state = state.select(&qid(3), &oid("o2")).unwrap();
        assert!(state.can_submit());

        let (results, record) = state.submit(1_000).unwrap();
        assert_eq!(results.screen(), Screen::Results);
        assert_eq!(record.score(), 2);
        assert_eq!(record.total_questions(), 3);
        assert_eq!(record.username(), "dana");
        assert_eq!(record.topic(), "foxes");
        assert_eq!(record.timestamp_ms(), 1_000);
        assert_eq!(results.outcome().map(QuizOutcome::score), Some(2));
    }

    #[test]
    fn select_rejects_unknown_pairs_and_wrong_screen() {
        let state = in_quiz(2);
        assert!(state.select(&qid(9), &oid("o1")).is_none());
        assert!(state.select(&qid(1), &oid("o9")).is_none());
        assert!(SessionState::new("foxes").select(&qid(1), &oid("o1")).is_none());
    }

    #[test]
    fn reset_keeps_identity_and_clears_attempt() {
        let mut state = in_quiz(1);
        state = state.select(&qid(1), &oid("o1")).unwrap();
        let (results, _) = state.submit(0).unwrap();

        let auth = results.reset().unwrap();
        assert_eq!(auth.screen(), Screen::Auth);
        assert!(auth.quiz().is_none());
        assert!(auth.answers().is_empty());
        assert!(auth.outcome().is_none());
        assert_eq!(auth.identity().map(UserIdentity::username), Some("dana"));
    }

    #[test]
    fn reset_only_from_results() {
        assert!(in_quiz(1).reset().is_none());
        assert!(SessionState::new("foxes").reset().is_none());
    }

    #[test]
    fn logout_clears_identity_from_any_screen() {
        let state = in_quiz(2).select(&qid(1), &oid("o1")).unwrap();
        let out = state.logout();
        assert_eq!(out.screen(), Screen::Auth);
        assert!(out.identity().is_none());
        assert!(out.answers().is_empty());
    }

    #[test]
    fn restored_identity_is_locked() {
        let state =
            SessionState::new("foxes").with_identity(UserIdentity::restored("dana").unwrap());
        assert!(state.is_identity_locked());
        assert!(!state.logout().is_identity_locked());
    }

    #[test]
    fn begin_loading_rejected_mid_quiz() {
        let state = in_quiz(1);
        assert!(
            state
                .begin_loading(UserIdentity::entered("other").unwrap())
                .is_none()
        );
    }

    #[test]
    fn submitted_record_mirrors_outcome() {
        let mut state = in_quiz(2);
        state = state.select(&qid(1), &oid("o1")).unwrap();
        state = state.select(&qid(2), &oid("o1")).unwrap();

        let (results, record) = state.submit(42).unwrap();
        let outcome = results.outcome().unwrap();
        assert_eq!(record.username(), "dana");
        assert_eq!(record.topic(), "foxes");
        assert_eq!(record.score(), outcome.score());
        assert_eq!(record.total_questions(), outcome.total());
        assert_eq!(record.timestamp_ms(), 42);
        assert_eq!(record.grade(), outcome.grade());
    }
}
