use std::sync::Arc;

use quiz_core::model::UserIdentity;
use storage::repository::{KeyValueStore, StorageError};
use storage::slots::{LEGACY_USERNAME_SLOT, USERNAME_SLOT};
use tracing::{debug, info};

/// Remembers the last username between runs.
///
/// This is a convenience marker, not an authentication boundary.
#[derive(Clone)]
pub struct IdentityStore {
    slots: Arc<dyn KeyValueStore>,
}

impl IdentityStore {
    #[must_use]
    pub fn new(slots: Arc<dyn KeyValueStore>) -> Self {
        Self { slots }
    }

    /// Read the remembered username as a locked identity.
    ///
    /// Falls back to the legacy slot. A blank stored value counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slots cannot be read.
    pub async fn restore(&self) -> Result<Option<UserIdentity>, StorageError> {
        let stored = match self.slots.get(USERNAME_SLOT).await? {
            Some(value) => Some(value),
            None => self.slots.get(LEGACY_USERNAME_SLOT).await?,
        };

        let identity = stored.and_then(|value| UserIdentity::restored(&value).ok());
        if let Some(identity) = identity.as_ref() {
            debug!(username = identity.username(), "restored remembered user");
        }
        Ok(identity)
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the username cannot be stored.
    pub async fn remember(&self, identity: &UserIdentity) -> Result<(), StorageError> {
        self.slots.set(USERNAME_SLOT, identity.username()).await
    }

    /// Drop the remembered username, including the legacy slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either slot cannot be removed.
    pub async fn forget(&self) -> Result<(), StorageError> {
        self.slots.remove(USERNAME_SLOT).await?;
        self.slots.remove(LEGACY_USERNAME_SLOT).await?;
        info!("remembered user cleared");
        Ok(())
    }
}
