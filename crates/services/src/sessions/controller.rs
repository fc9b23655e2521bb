use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quiz_core::Clock;
use quiz_core::model::{OptionId, QuestionId, UserIdentity};
use quiz_core::session::SessionState;
use tracing::{debug, error, info, warn};

use crate::error::SessionError;
use crate::history_service::HistoryStore;
use crate::identity_service::IdentityStore;
use crate::quiz_source::QuizSource;

/// Held while an async transition runs; clears the flag on drop, including
/// when the owning future is abandoned.
struct FlightGuard<'a>(&'a AtomicBool);

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives a [`SessionState`] through auth, quiz and results, performing the
/// storage side effects each transition requires.
///
/// The controller owns the current snapshot and hands out clones. Async
/// transitions (start, submit, logout) are single-flight: a second call while
/// one is pending fails with `SessionError::Busy` instead of queueing.
pub struct SessionController {
    clock: Clock,
    source: Arc<dyn QuizSource>,
    history: HistoryStore,
    identity: IdentityStore,
    state: Mutex<SessionState>,
    in_flight: AtomicBool,
}

impl SessionController {
    #[must_use]
    pub fn new(
        clock: Clock,
        source: Arc<dyn QuizSource>,
        history: HistoryStore,
        identity: IdentityStore,
        initial: SessionState,
    ) -> Self {
        Self {
            clock,
            source,
            history,
            identity,
            state: Mutex::new(initial),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Build a controller for `topic`, restoring a remembered user as a locked identity.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the username slot cannot be read.
    pub async fn restore(
        clock: Clock,
        source: Arc<dyn QuizSource>,
        history: HistoryStore,
        identity: IdentityStore,
        topic: &str,
    ) -> Result<Self, SessionError> {
        let mut initial = SessionState::new(topic);
        if let Some(remembered) = identity.restore().await? {
            initial = initial.with_identity(remembered);
        }
        Ok(Self::new(clock, source, history, identity, initial))
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn commit(&self, next: SessionState) -> SessionState {
        *self.lock() = next.clone();
        next
    }

    /// Current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    /// Auth → Quiz.
    ///
    /// A locked identity is reused as is; otherwise `entered_username` is
    /// validated. A failed or empty fetch lands back on Auth with the load
    /// error flag set. Outside Auth the current snapshot is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Busy` while another transition is pending and
    /// `SessionError::Identity` for a blank username.
    pub async fn start_quiz(&self, entered_username: &str) -> Result<SessionState, SessionError> {
        let _flight = FlightGuard::acquire(&self.in_flight).ok_or(SessionError::Busy)?;
        let current = self.snapshot();

        let identity = match current.identity() {
            Some(identity) if identity.is_locked() => identity.clone(),
            _ => UserIdentity::entered(entered_username)?,
        };

        let Some(loading) = current.begin_loading(identity.clone()) else {
            debug!(screen = ?current.screen(), "start ignored outside auth");
            return Ok(current);
        };
        self.commit(loading.clone());

        let next = match self.source.fetch(loading.topic()).await {
            Ok(quiz) if !quiz.is_empty() => {
                if let Err(err) = self.identity.remember(&identity).await {
                    error!(error = %err, "failed to remember username");
                }
                debug!(questions = quiz.total_questions(), "quiz loaded");
                loading.quiz_loaded(Arc::new(quiz))
            }
            Ok(_) => {
                warn!(topic = loading.topic(), "quiz source returned no questions");
                loading.quiz_failed()
            }
            Err(err) => {
                warn!(topic = loading.topic(), error = %err, "quiz fetch failed");
                loading.quiz_failed()
            }
        };

        Ok(self.commit(next))
    }

    /// Record a selection. Unknown pairs or a non-quiz screen leave the state unchanged.
    pub fn select(&self, question: &QuestionId, option: &OptionId) -> SessionState {
        let mut guard = self.lock();
        match guard.select(question, option) {
            Some(next) => {
                *guard = next.clone();
                next
            }
            None => {
                debug!(%question, %option, "selection ignored");
                guard.clone()
            }
        }
    }

    /// Quiz → Results, appending the attempt to history.
    ///
    /// While the answer set is incomplete this is a no-op returning the
    /// current snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Busy` while another transition is pending and
    /// `SessionError::History` if the attempt cannot be stored; the session
    /// then stays on the quiz screen so the submit can be repeated.
    pub async fn submit(&self) -> Result<SessionState, SessionError> {
        let _flight = FlightGuard::acquire(&self.in_flight).ok_or(SessionError::Busy)?;
        let current = self.snapshot();

        let Some((next, record)) = current.submit(self.clock.now_millis()) else {
            debug!(progress = ?current.progress(), "submit ignored: quiz incomplete");
            return Ok(current);
        };

        let (score, total, grade) = (record.score(), record.total_questions(), record.grade());
        if let Err(err) = self.history.append(record).await {
            error!(error = %err, "failed to record attempt");
            return Err(err.into());
        }

        info!(score, total, %grade, "quiz submitted");
        Ok(self.commit(next))
    }

    /// Results → Auth, keeping the identity. No-op on other screens.
    pub fn reset(&self) -> SessionState {
        let mut guard = self.lock();
        match guard.reset() {
            Some(next) => {
                *guard = next.clone();
                next
            }
            None => guard.clone(),
        }
    }

    /// Any screen → Auth, forgetting the remembered username.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Busy` while another transition is pending and
    /// `SessionError::Storage` if the username slots cannot be cleared.
    pub async fn logout(&self) -> Result<SessionState, SessionError> {
        let _flight = FlightGuard::acquire(&self.in_flight).ok_or(SessionError::Busy)?;
        self.identity.forget().await?;
        let next = self.snapshot().logout();
        Ok(self.commit(next))
    }
}
