//! Serialized form of the attempt history slot.
//!
//! Current writers produce a versioned envelope:
//!
//! ```json
//! {"version":1,"records":[{"username":"dana","topic":"foxes","score":4,"totalQuestions":5,"timestamp":1700000000000}]}
//! ```
//!
//! Readers also accept the bare record array written before the envelope
//! existed. Anything else is rejected with [`HistoryBlobError`].

use quiz_core::model::{AttemptError, AttemptRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::StorageError;

/// Version tag written into every envelope.
pub const HISTORY_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryBlobError {
    #[error("history is not valid JSON of the expected shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported history schema version {0}")]
    UnsupportedVersion(u32),

    #[error("history record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: AttemptError,
    },
}

impl From<HistoryBlobError> for StorageError {
    fn from(err: HistoryBlobError) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Persisted shape of one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttemptRecordDto {
    username: String,
    topic: String,
    score: u32,
    total_questions: u32,
    timestamp: i64,
}

impl AttemptRecordDto {
    fn from_record(record: &AttemptRecord) -> Self {
        Self {
            username: record.username().to_owned(),
            topic: record.topic().to_owned(),
            score: record.score(),
            total_questions: record.total_questions(),
            timestamp: record.timestamp_ms(),
        }
    }

    fn into_record(self) -> Result<AttemptRecord, AttemptError> {
        AttemptRecord::from_persisted(
            self.username,
            self.topic,
            self.score,
            self.total_questions,
            self.timestamp,
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HistoryEnvelope {
    version: u32,
    records: Vec<AttemptRecordDto>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PersistedHistory {
    Versioned(HistoryEnvelope),
    Legacy(Vec<AttemptRecordDto>),
}

/// Serialize `records` (most recent first) into the current envelope format.
///
/// # Errors
///
/// Returns `HistoryBlobError::Json` if serialization fails.
pub fn encode_history(records: &[AttemptRecord]) -> Result<String, HistoryBlobError> {
    let envelope = HistoryEnvelope {
        version: HISTORY_SCHEMA_VERSION,
        records: records.iter().map(AttemptRecordDto::from_record).collect(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a history slot value, preserving record order.
///
/// # Errors
///
/// Returns `HistoryBlobError` for invalid JSON, an unknown version or a record
/// that breaks `AttemptRecord` invariants.
pub fn decode_history(raw: &str) -> Result<Vec<AttemptRecord>, HistoryBlobError> {
    let records = match serde_json::from_str::<PersistedHistory>(raw)? {
        PersistedHistory::Versioned(envelope) if envelope.version == HISTORY_SCHEMA_VERSION => {
            envelope.records
        }
        PersistedHistory::Versioned(envelope) => {
            return Err(HistoryBlobError::UnsupportedVersion(envelope.version));
        }
        PersistedHistory::Legacy(records) => records,
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, dto)| {
            dto.into_record()
                .map_err(|source| HistoryBlobError::InvalidRecord { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: u32, ts: i64) -> AttemptRecord {
        AttemptRecord::from_persisted(name, "שועלים", score, 5, ts).unwrap()
    }

    #[test]
    fn encoded_history_decodes_in_order() {
        let records = vec![record("b", 5, 2), record("a", 2, 1)];
        let raw = encode_history(&records).unwrap();
        assert!(raw.starts_with(r#"{"version":1,"#), "{raw}");
        assert!(raw.contains(r#""totalQuestions":5"#), "{raw}");

        assert_eq!(decode_history(&raw).unwrap(), records);
    }

    #[test]
    fn legacy_bare_array_is_accepted() {
        let raw = r#"[{"username":"dana","topic":"שועלים","score":3,"totalQuestions":5,"timestamp":1700000000000}]"#;
        let records = decode_history(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].username(), "dana");
        assert_eq!(records[0].timestamp_ms(), 1_700_000_000_000);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            decode_history("{not json"),
            Err(HistoryBlobError::Json(_))
        ));
        assert!(matches!(
            decode_history(r#"{"username":"x"}"#),
            Err(HistoryBlobError::Json(_))
        ));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let raw = r#"{"version":7,"records":[]}"#;
        assert!(matches!(
            decode_history(raw),
            Err(HistoryBlobError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn invalid_record_is_rejected() {
        let raw = r#"{"version":1,"records":[{"username":"dana","topic":"t","score":9,"totalQuestions":5,"timestamp":0}]}"#;
        assert!(matches!(
            decode_history(raw),
            Err(HistoryBlobError::InvalidRecord { index: 0, .. })
        ));
    }
}
