use services::AdminHistoryEntry;

use crate::vm::results_vm::band_class;
use crate::vm::time_fmt::format_epoch_millis;

/// One row of the admin history table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub username: String,
    pub topic: String,
    pub score_str: String,
    pub grade: u8,
    pub band_class: &'static str,
    pub taken_at_str: String,
}

impl From<&AdminHistoryEntry> for HistoryRowVm {
    fn from(entry: &AdminHistoryEntry) -> Self {
        let record = &entry.record;
        Self {
            username: record.username().to_string(),
            topic: record.topic().to_string(),
            score_str: format!("{}/{}", record.score(), record.total_questions()),
            grade: entry.grade.value(),
            band_class: band_class(entry.grade.band()),
            taken_at_str: format_epoch_millis(record.timestamp_ms()),
        }
    }
}

#[must_use]
pub fn map_history_rows(entries: &[AdminHistoryEntry]) -> Vec<HistoryRowVm> {
    entries.iter().map(HistoryRowVm::from).collect()
}
