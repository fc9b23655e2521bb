use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("username cannot be empty")]
    EmptyUsername,
}

/// The name the current user entered, or the one remembered from a previous run.
///
/// `locked` marks an identity restored from durable storage ("auto-connected").
/// It is a convenience marker only and carries no authentication guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    username: String,
    locked: bool,
}

impl UserIdentity {
    /// Identity typed into the auth form.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::EmptyUsername` for blank input.
    pub fn entered(username: &str) -> Result<Self, IdentityError> {
        Ok(Self {
            username: normalize(username)?,
            locked: false,
        })
    }

    /// Identity read back from the username slot at startup.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::EmptyUsername` if the stored value is blank.
    pub fn restored(username: &str) -> Result<Self, IdentityError> {
        Ok(Self {
            username: normalize(username)?,
            locked: true,
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

fn normalize(raw: &str) -> Result<String, IdentityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentityError::EmptyUsername);
    }
    Ok(trimmed.to_owned())
}
