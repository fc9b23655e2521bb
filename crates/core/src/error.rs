use thiserror::Error;

use crate::model::{AttemptError, IdError, IdentityError, QuizError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
