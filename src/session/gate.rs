//! Session gate
//!
//! Every check reads storage again; nothing is cached.

use crate::directory::User;
use crate::error::StorageError;
use crate::storage::{CURRENT_USER_KEY, Storage};
use log::warn;

/// Returns whether a non-empty session record is present.
///
/// A storage failure counts as "not authenticated".
pub fn is_authenticated<S: Storage + ?Sized>(storage: &S) -> bool {
    match storage.get(CURRENT_USER_KEY) {
        Ok(Some(value)) => !value.is_empty(),
        Ok(None) => false,
        Err(e) => {
            warn!("Session check failed: {}", e);
            false
        }
    }
}

/// Decodes the session record, if any.
pub fn current_user<S: Storage + ?Sized>(storage: &S) -> Result<Option<User>, StorageError> {
    match storage.get(CURRENT_USER_KEY)? {
        Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

/// Replaces the session record with `user`.
pub fn write_session<S: Storage + ?Sized>(storage: &mut S, user: &User) -> Result<(), StorageError> {
    let raw = serde_json::to_string(user)?;
    storage.set(CURRENT_USER_KEY, &raw)
}

/// Removes the session record.
pub fn clear_session<S: Storage + ?Sized>(storage: &mut S) -> Result<(), StorageError> {
    storage.remove(CURRENT_USER_KEY)
}
