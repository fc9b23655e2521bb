#![forbid(unsafe_code)]

pub mod admin;
pub mod app_services;
pub mod error;
pub mod history_service;
pub mod identity_service;
pub mod quiz_source;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use admin::{ADMIN_TAP_THRESHOLD, AdminGate, AdminHistoryEntry, AdminHistoryService, ClearConfirmation};
pub use app_services::AppServices;
pub use error::{AppServicesError, HistoryError, QuizSourceError, SessionError};
pub use history_service::HistoryStore;
pub use identity_service::IdentityStore;
pub use quiz_source::{DEFAULT_TOPIC, QuizSource, StaticQuizSource, fox_quiz};
pub use sessions::{Screen, SessionController, SessionState};
