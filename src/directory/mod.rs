//! User directory
//!
//! The seeded set of demo users, the pure password update, and the
//! snapshot that overrides the seed once something has been persisted.

pub mod snapshot;
pub mod users;

pub use snapshot::{load_directory, persist_directory};
pub use users::{User, UsersData, update_user_password};
