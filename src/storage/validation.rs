//! Key validation
//!
//! Keys double as file names for the file backend, so they must not be
//! able to escape the storage root.

use crate::error::StorageError;

/// Maximum key length in bytes
pub const MAX_KEY_LENGTH: usize = 128;

/// Validate that a key is safe to use as a file name
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if is_safe_key(key) {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Check a key for emptiness, separators, traversal and control characters
pub fn is_safe_key(key: &str) -> bool {
    !key.trim().is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && !key.contains("..")
        && !key.contains(['/', '\\'])
        && !key.chars().any(char::is_control)
}
