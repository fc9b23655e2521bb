//! Keys of the durable slots the application reads and writes.

/// Username remembered between runs.
pub const USERNAME_SLOT: &str = "quiz_username";

/// Older builds stored the name under this key. Read as a fallback, removed on logout.
pub const LEGACY_USERNAME_SLOT: &str = "quiz_user_email";

/// Serialized attempt history, most recent first.
pub const HISTORY_SLOT: &str = "quiz_history";
