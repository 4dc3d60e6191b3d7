//! Directory snapshot
//!
//! Resolves the working directory at startup: the persisted snapshot if
//! one exists and decodes, otherwise the seed.

use log::{info, warn};

use super::users::UsersData;
use crate::error::StorageError;
use crate::storage::{Storage, USERS_DATA_KEY};

/// Loads the persisted directory, falling back to `seed`.
///
/// A snapshot that fails to decode is logged and ignored.
pub fn load_directory<S: Storage + ?Sized>(
    storage: &S,
    seed: &UsersData,
) -> Result<UsersData, StorageError> {
    match storage.get(USERS_DATA_KEY)? {
        Some(raw) => match serde_json::from_str::<UsersData>(&raw) {
            Ok(directory) => {
                info!("Loaded {} users from snapshot", directory.len());
                Ok(directory)
            }
            Err(e) => {
                warn!("Ignoring undecodable {} snapshot: {}", USERS_DATA_KEY, e);
                Ok(seed.clone())
            }
        },
        None => {
            info!("No snapshot found, using {} seed users", seed.len());
            Ok(seed.clone())
        }
    }
}

/// Writes `directory` to storage, replacing any previous snapshot.
pub fn persist_directory<S: Storage + ?Sized>(
    storage: &mut S,
    directory: &UsersData,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(directory)?;
    storage.set(USERS_DATA_KEY, &raw)
}
