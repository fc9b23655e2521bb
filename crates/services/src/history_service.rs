use std::sync::Arc;

use quiz_core::model::AttemptRecord;
use storage::history_blob::{decode_history, encode_history};
use storage::repository::{KeyValueStore, StorageError};
use storage::slots::HISTORY_SLOT;
use tracing::{info, warn};

use crate::error::HistoryError;

/// Durable, most-recent-first list of quiz attempts.
#[derive(Clone)]
pub struct HistoryStore {
    slots: Arc<dyn KeyValueStore>,
}

impl HistoryStore {
    #[must_use]
    pub fn new(slots: Arc<dyn KeyValueStore>) -> Self {
        Self { slots }
    }

    /// Load every recorded attempt, most recent first.
    ///
    /// Missing, unreadable or malformed history yields an empty list; the cause
    /// is logged and never returned.
    pub async fn load_all(&self) -> Vec<AttemptRecord> {
        match self.read_stored().await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "failed to read attempt history; treating as empty");
                Vec::new()
            }
        }
    }

    /// Stored records, or an empty list when the slot is absent or malformed.
    /// Only a failed read is an error.
    async fn read_stored(&self) -> Result<Vec<AttemptRecord>, StorageError> {
        let Some(raw) = self.slots.get(HISTORY_SLOT).await? else {
            return Ok(Vec::new());
        };

        match decode_history(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(error = %err, "discarding malformed attempt history");
                Ok(Vec::new())
            }
        }
    }

    /// Put `record` at the front of the history and persist the whole list.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the current list cannot be read or the
    /// updated list cannot be written. A failed read leaves the slot untouched.
    pub async fn append(&self, record: AttemptRecord) -> Result<(), HistoryError> {
        let mut records = self.read_stored().await?;
        records.insert(0, record);
        let blob = encode_history(&records).map_err(StorageError::from)?;
        self.slots.set(HISTORY_SLOT, &blob).await?;
        info!(attempts = records.len(), "attempt recorded");
        Ok(())
    }

    /// Remove all recorded attempts. Clearing an empty history is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the slot cannot be removed.
    pub async fn clear(&self) -> Result<(), HistoryError> {
        self.slots.remove(HISTORY_SLOT).await?;
        info!("attempt history cleared");
        Ok(())
    }
}
