use dioxus::prelude::*;
use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    EmptyUsername,
    SaveFailed,
}

impl ViewError {
    /// Map a failed session transition. `Busy` is not a user-facing error.
    #[must_use]
    pub fn from_session(err: &SessionError) -> Option<Self> {
        match err {
            SessionError::Busy => None,
            SessionError::Identity(_) => Some(Self::EmptyUsername),
            SessionError::History(_) => Some(Self::SaveFailed),
            _ => Some(Self::Unknown),
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "משהו השתבש. אנא נסה שוב.",
            Self::EmptyUsername => "יש להזין שם משתמש.",
            Self::SaveFailed => "שמירת התוצאה נכשלה. אנא נסה לשלוח שוב.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
