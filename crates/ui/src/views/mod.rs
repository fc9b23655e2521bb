mod admin;
mod auth;
mod quiz;
mod results;
mod shell;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::AdminPanel;
pub use auth::AuthView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use shell::QuizShell;
pub use state::{ViewError, ViewState, view_state_from_resource};

/// Shown on the auth screen after a failed or empty quiz fetch.
pub const LOAD_ERROR_MESSAGE: &str = "אירעה שגיאה בטעינת החידון. אנא נסה שוב.";
