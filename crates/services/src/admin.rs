//! Hidden admin panel over the attempt history.
//!
//! The panel is revealed by tapping the title repeatedly. It is a diagnostic
//! convenience, not a security boundary.

use quiz_core::model::AttemptRecord;
use quiz_core::scoring::Grade;

use crate::error::HistoryError;
use crate::history_service::HistoryStore;

/// Taps on the title needed to reveal the admin panel.
pub const ADMIN_TAP_THRESHOLD: u32 = 10;

/// Counts title taps and opens once the threshold is reached.
///
/// The counter resets to zero whenever it opens the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminGate {
    taps: u32,
    threshold: u32,
    open: bool,
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(ADMIN_TAP_THRESHOLD)
    }
}

impl AdminGate {
    /// A threshold of zero is treated as one.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self {
            taps: 0,
            threshold: threshold.max(1),
            open: false,
        }
    }

    /// Register one tap. Returns true when this tap opened the panel.
    pub fn tap(&mut self) -> bool {
        self.taps = self.taps.saturating_add(1);
        if self.taps >= self.threshold {
            self.taps = 0;
            self.open = true;
            return true;
        }
        false
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn taps(&self) -> u32 {
        self.taps
    }
}

/// One row of the admin history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminHistoryEntry {
    pub record: AttemptRecord,
    pub grade: Grade,
}

/// Proof that the user confirmed clearing the history.
///
/// Only [`AdminHistoryService::request_clear`] creates one, and
/// [`AdminHistoryService::clear_history`] consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearConfirmation {
    _private: (),
}

#[derive(Clone)]
pub struct AdminHistoryService {
    history: HistoryStore,
}

impl AdminHistoryService {
    #[must_use]
    pub fn new(history: HistoryStore) -> Self {
        Self { history }
    }

    /// Every recorded attempt with its grade, most recent first.
    pub async fn entries(&self) -> Vec<AdminHistoryEntry> {
        self.history
            .load_all()
            .await
            .into_iter()
            .map(|record| AdminHistoryEntry {
                grade: record.grade(),
                record,
            })
            .collect()
    }

    /// Start the confirmation step for clearing the history.
    #[must_use]
    pub fn request_clear(&self) -> ClearConfirmation {
        ClearConfirmation { _private: () }
    }

    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the history slot cannot be cleared.
    pub async fn clear_history(&self, _confirmed: ClearConfirmation) -> Result<(), HistoryError> {
        self.history.clear().await
    }
}
