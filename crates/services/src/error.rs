//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{IdError, IdentityError, QuizError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `QuizSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizSourceError {
    #[error("quiz source is unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Invalid(#[from] QuizError),
    #[error(transparent)]
    InvalidId(#[from] IdError),
}

/// Errors emitted by `HistoryStore` writes. Reads never fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the session controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("another session transition is still in flight")]
    Busy,
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
