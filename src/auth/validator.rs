//! Credential validator
//!
//! Checks login input against the user directory. Passwords are compared
//! as plaintext.

use super::forms::LoginForm;
use crate::directory::{User, UsersData};
use crate::error::AuthError;

/// Performs basic input sanitation to check for malicious or malformed usernames/passwords.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty()
        && input.chars().count() <= max_length
        && !input.contains(['\r', '\n', '\0'])
}

/// Validates the shape of a username.
pub fn validate_username(username: &str, max_length: usize) -> Result<(), AuthError> {
    if !is_valid_input(username, max_length) {
        return Err(AuthError::MalformedInput("Invalid username format".into()));
    }
    Ok(())
}

/// Validates a login form against `directory` and returns the matching user.
///
/// Unknown usernames and wrong passwords produce the same error.
pub fn validate_credentials(
    directory: &UsersData,
    form: &LoginForm,
    max_username_length: usize,
    max_input_length: usize,
) -> Result<User, AuthError> {
    validate_username(&form.username, max_username_length)?;

    if !is_valid_input(&form.password, max_input_length) {
        return Err(AuthError::MalformedInput("Invalid password format".into()));
    }

    match directory.find_by_username(&form.username) {
        Some(user) if user.password == form.password => Ok(user.clone()),
        _ => Err(AuthError::InvalidCredentials(form.username.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::seed_directory;

    fn check(username: &str, password: &str) -> Result<User, AuthError> {
        validate_credentials(&seed_directory(), &LoginForm::new(username, password), 32, 128)
    }

    #[test]
    fn test_valid_login() {
        let user = check("alice", "alice123").unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_wrong_password_and_unknown_user() {
        assert!(matches!(
            check("alice", "nope"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            check("carol", "alice123"),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(check("", "x"), Err(AuthError::MalformedInput(_))));
        assert!(matches!(check("al\nice", "x"), Err(AuthError::MalformedInput(_))));
        assert!(matches!(check("alice", "   "), Err(AuthError::MalformedInput(_))));
        assert!(matches!(
            check(&"a".repeat(33), "x"),
            Err(AuthError::MalformedInput(_))
        ));
    }
}
