use std::sync::Arc;

use services::{AdminHistoryService, SessionController};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionController>;
    fn admin(&self) -> Arc<AdminHistoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionController>,
    admin: Arc<AdminHistoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            admin: app.admin(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
