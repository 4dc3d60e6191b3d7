//! Module `context`
//!
//! Defines `AuthContext`, the explicitly passed state of the auth core: the
//! storage medium and the user directory resolved at startup.

use log::info;

use crate::directory::{UsersData, load_directory};
use crate::error::StorageError;
use crate::storage::Storage;

/// Input limits applied to login forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthLimits {
    pub max_username_length: usize,
    pub max_input_length: usize,
}

impl Default for AuthLimits {
    fn default() -> Self {
        Self {
            max_username_length: 32,
            max_input_length: 512,
        }
    }
}

/// Storage plus the working copy of the user directory.
///
/// The directory is read from the snapshot once in [`AuthContext::initialize`]
/// and kept in step with every snapshot this context writes.
pub struct AuthContext<S: Storage> {
    storage: S,
    directory: UsersData,
    limits: AuthLimits,
}

impl<S: Storage> AuthContext<S> {
    /// Resolves the directory (snapshot, else `seed`) and builds the context.
    pub fn initialize(storage: S, seed: &UsersData, limits: AuthLimits) -> Result<Self, StorageError> {
        let directory = load_directory(&storage, seed)?;
        info!("Auth context ready with {} users", directory.len());
        Ok(Self {
            storage,
            directory,
            limits,
        })
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn directory(&self) -> &UsersData {
        &self.directory
    }

    pub fn limits(&self) -> AuthLimits {
        self.limits
    }

    /// Whether a session is currently present in storage.
    pub fn is_authenticated(&self) -> bool {
        crate::session::gate::is_authenticated(&self.storage)
    }

    /// Consumes the context, handing back its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // --------------------
    // Setter methods
    // --------------------

    pub(crate) fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub(crate) fn set_directory(&mut self, directory: UsersData) {
        self.directory = directory;
    }
}
