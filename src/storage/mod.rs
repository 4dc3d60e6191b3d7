//! Key/value storage
//!
//! The storage medium behind sessions and directory snapshots. Values are
//! plain strings, writes are last-writer-wins and nothing expires.

pub mod filesystem;
pub mod memory;
pub mod validation;

pub use filesystem::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Key holding the serialized session user
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Key holding the serialized user directory
pub const USERS_DATA_KEY: &str = "usersData";

/// A synchronous string key/value store.
pub trait Storage {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
