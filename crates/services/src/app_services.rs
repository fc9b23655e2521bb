use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::admin::AdminHistoryService;
use crate::error::AppServicesError;
use crate::history_service::HistoryStore;
use crate::identity_service::IdentityStore;
use crate::quiz_source::{DEFAULT_TOPIC, QuizSource, StaticQuizSource};
use crate::sessions::SessionController;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionController>,
    admin: Arc<AdminHistoryService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or identity restore fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_storage(storage, clock, Arc::new(StaticQuizSource::new())).await
    }

    /// Build services over an existing storage and quiz source.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Session` if the remembered username cannot be read.
    pub async fn with_storage(
        storage: Storage,
        clock: Clock,
        source: Arc<dyn QuizSource>,
    ) -> Result<Self, AppServicesError> {
        let history = HistoryStore::new(Arc::clone(&storage.slots));
        let identity = IdentityStore::new(Arc::clone(&storage.slots));

        let session = SessionController::restore(
            clock,
            source,
            history.clone(),
            identity,
            DEFAULT_TOPIC,
        )
        .await?;

        Ok(Self {
            session: Arc::new(session),
            admin: Arc::new(AdminHistoryService::new(history)),
        })
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionController> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn admin(&self) -> Arc<AdminHistoryService> {
        Arc::clone(&self.admin)
    }
}
