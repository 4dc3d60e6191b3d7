//! Seed users
//!
//! The directory every fresh storage starts from.

use std::sync::LazyLock;

use crate::directory::{User, UsersData};

/// Static seed directory - replaced by the persisted snapshot once one exists
pub static SEED_USERS: LazyLock<UsersData> = LazyLock::new(|| {
    UsersData::new(vec![
        User::new(1, "alice", "alice123"),
        User::new(2, "bob", "bob123"),
        User::new(3, "admin", "admin123"),
    ])
});

/// Returns an owned copy of the seed directory
pub fn seed_directory() -> UsersData {
    SEED_USERS.clone()
}
