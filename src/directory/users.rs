//! User records and the directory update.

use log::debug;
use serde::{Deserialize, Serialize};

/// A user record. The password is stored in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Ordered collection of users, keyed implicitly by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersData {
    pub users: Vec<User>,
}

impl UsersData {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Returns a copy of `directory` with the password of user `user_id`
/// replaced. Every other record is left as is.
///
/// An id with no matching record is a silent no-op: the returned
/// directory equals the input.
pub fn update_user_password(directory: &UsersData, user_id: u64, new_password: &str) -> UsersData {
    if !directory.contains(user_id) {
        debug!("No user with id {} in directory, password unchanged", user_id);
    }

    let users = directory
        .users
        .iter()
        .map(|user| {
            if user.id == user_id {
                User {
                    password: new_password.to_string(),
                    ..user.clone()
                }
            } else {
                user.clone()
            }
        })
        .collect();

    UsersData { users }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> UsersData {
        UsersData::new(vec![
            User::new(1, "alice", "alice123"),
            User::new(2, "bob", "bob123"),
            User::new(3, "admin", "admin123"),
        ])
    }

    #[test]
    fn test_update_changes_only_target() {
        let before = directory();
        let after = update_user_password(&before, 2, "N3w$ecret");

        assert_eq!(after.find_by_id(2).unwrap().password, "N3w$ecret");
        assert_eq!(after.find_by_id(2).unwrap().username, "bob");
        assert_eq!(after.find_by_id(1), before.find_by_id(1));
        assert_eq!(after.find_by_id(3), before.find_by_id(3));
        assert_eq!(after.len(), before.len());
        // input is untouched
        assert_eq!(before.find_by_id(2).unwrap().password, "bob123");
    }

    #[test]
    fn test_update_preserves_order() {
        let after = update_user_password(&directory(), 1, "x");
        let ids: Vec<u64> = after.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let once = update_user_password(&directory(), 3, "Adm1n$pass");
        let twice = update_user_password(&once, 3, "Adm1n$pass");
        assert_eq!(once, twice);
    }

    // Unknown ids are a no-op rather than a "user not found" error.
    #[test]
    fn test_update_unknown_id_returns_equal_directory() {
        for id in [0, 4, 42, u64::MAX] {
            assert_eq!(update_user_password(&directory(), id, "whatever"), directory());
        }
        let empty = UsersData::default();
        assert_eq!(update_user_password(&empty, 1, "pw"), empty);
    }

    #[test]
    fn test_lookups() {
        let dir = directory();
        assert_eq!(dir.find_by_username("admin").map(|u| u.id), Some(3));
        assert!(dir.find_by_username("carol").is_none());
        assert!(dir.contains(1));
        assert!(!dir.contains(9));
    }

    #[test]
    fn test_json_shape() {
        let dir = UsersData::new(vec![User::new(7, "eve", "pw")]);
        let json = serde_json::to_string(&dir).unwrap();
        assert_eq!(
            json,
            r#"{"users":[{"id":7,"username":"eve","password":"pw"}]}"#
        );
    }
}
