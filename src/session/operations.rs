//! Session operations
//!
//! Login, logout and password reset on top of an [`AuthContext`].

use log::{info, warn};

use super::context::AuthContext;
use super::gate;
use super::results::{LoginResult, LogoutResult, MSG_PASSWORD_UPDATED, ResetOutcome};
use crate::auth::{LoginForm, ResetPasswordForm, validate_credentials, validate_reset_form};
use crate::directory::{User, persist_directory, update_user_password};
use crate::error::AppError;
use crate::storage::{CURRENT_USER_KEY, Storage};

/// Checks the login form against the directory and opens a session.
///
/// A successful login replaces any existing session.
pub fn process_login<S: Storage>(
    ctx: &mut AuthContext<S>,
    form: &LoginForm,
) -> Result<LoginResult, AppError> {
    let limits = ctx.limits();
    let user = validate_credentials(
        ctx.directory(),
        form,
        limits.max_username_length,
        limits.max_input_length,
    )?;

    gate::write_session(ctx.storage_mut(), &user)?;
    info!("User {} (id {}) logged in", user.username, user.id);

    Ok(LoginResult { user })
}

/// Removes the session record. Logging out without a session is not an error,
/// but a failed session read is.
pub fn process_logout<S: Storage>(ctx: &mut AuthContext<S>) -> Result<LogoutResult, AppError> {
    let was_logged_in = ctx
        .storage()
        .get(CURRENT_USER_KEY)?
        .is_some_and(|value| !value.is_empty());

    gate::clear_session(ctx.storage_mut())?;
    if was_logged_in {
        info!("Session cleared");
    }

    Ok(LogoutResult { was_logged_in })
}

/// Changes the password of the logged-in user.
///
/// The confirmation check runs before the policy. Only a valid form touches
/// storage, and then both the directory and the session are rewritten.
pub fn process_reset<S: Storage>(
    ctx: &mut AuthContext<S>,
    form: &ResetPasswordForm,
) -> Result<ResetOutcome, AppError> {
    let Some(current) = gate::current_user(ctx.storage())? else {
        return Ok(ResetOutcome::NoSession);
    };

    let validation = validate_reset_form(form);
    if !validation.is_valid {
        info!("Password reset for {} rejected: {}", current.username, validation.message);
        return Ok(ResetOutcome::Rejected(validation));
    }

    let directory = update_user_password(ctx.directory(), current.id, &form.new_password);
    if !directory.contains(current.id) {
        warn!(
            "Session user {} (id {}) is not in the directory; only the session is updated",
            current.username, current.id
        );
    }
    persist_directory(ctx.storage_mut(), &directory)?;
    ctx.set_directory(directory);

    let user = User {
        password: form.new_password.clone(),
        ..current
    };
    gate::write_session(ctx.storage_mut(), &user)?;
    info!("Password updated for {} (id {})", user.username, user.id);

    Ok(ResetOutcome::Updated {
        user,
        message: MSG_PASSWORD_UPDATED.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::seed_directory;
    use crate::directory::{UsersData, load_directory};
    use crate::error::{AuthError, StorageError};
    use crate::session::AuthLimits;
    use crate::storage::{MemoryStorage, USERS_DATA_KEY};
    use std::io;

    /// Memory storage whose session reads fail.
    #[derive(Default)]
    struct UnreadableSession {
        inner: MemoryStorage,
    }

    impl Storage for UnreadableSession {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if key == CURRENT_USER_KEY {
                return Err(StorageError::IoError(io::Error::other("read failed")));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn context() -> AuthContext<MemoryStorage> {
        AuthContext::initialize(MemoryStorage::new(), &seed_directory(), AuthLimits::default()).unwrap()
    }

    fn logged_in_as(username: &str, password: &str) -> AuthContext<MemoryStorage> {
        let mut ctx = context();
        process_login(&mut ctx, &LoginForm::new(username, password)).unwrap();
        ctx
    }

    #[test]
    fn test_login_opens_session() {
        let mut ctx = context();
        let result = process_login(&mut ctx, &LoginForm::new("bob", "bob123")).unwrap();
        assert_eq!(result.user.id, 2);
        assert!(ctx.is_authenticated());
        assert_eq!(gate::current_user(ctx.storage()).unwrap(), Some(result.user));
    }

    #[test]
    fn test_failed_login_leaves_no_session() {
        let mut ctx = context();
        let err = process_login(&mut ctx, &LoginForm::new("bob", "wrong")).unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::InvalidCredentials(_))));
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_logout() {
        let mut ctx = logged_in_as("alice", "alice123");
        assert!(process_logout(&mut ctx).unwrap().was_logged_in);
        assert!(!ctx.is_authenticated());
        assert!(!process_logout(&mut ctx).unwrap().was_logged_in);
    }

    #[test]
    fn test_logout_clears_empty_record() {
        let mut ctx = context();
        ctx.storage_mut().set(CURRENT_USER_KEY, "").unwrap();

        assert!(!process_logout(&mut ctx).unwrap().was_logged_in);
        assert_eq!(ctx.storage().get(CURRENT_USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_logout_reports_failed_session_read() {
        let mut ctx =
            AuthContext::initialize(UnreadableSession::default(), &seed_directory(), AuthLimits::default())
                .unwrap();
        ctx.storage_mut().inner.set(CURRENT_USER_KEY, "{}").unwrap();

        let err = process_logout(&mut ctx).unwrap_err();
        assert!(matches!(err, AppError::Storage(StorageError::IoError(_))));
        // the record is left for a retry rather than reported as logged out
        assert!(ctx.storage().inner.get(CURRENT_USER_KEY).unwrap().is_some());
    }

    #[test]
    fn test_reset_without_session() {
        let mut ctx = context();
        let outcome = process_reset(&mut ctx, &ResetPasswordForm::new("Abc123$5", "Abc123$5")).unwrap();
        assert_eq!(outcome, ResetOutcome::NoSession);
        assert_eq!(ctx.storage().get(USERS_DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_reset_mismatch_writes_nothing() {
        let mut ctx = logged_in_as("alice", "alice123");
        let outcome = process_reset(&mut ctx, &ResetPasswordForm::new("A1b2c3$x", "A1b2c3$y")).unwrap();
        assert_eq!(outcome.message(), "Passwords do not match");
        assert!(!outcome.is_updated());
        assert_eq!(ctx.storage().get(USERS_DATA_KEY).unwrap(), None);
        assert_eq!(
            gate::current_user(ctx.storage()).unwrap().unwrap().password,
            "alice123"
        );
    }

    #[test]
    fn test_reset_policy_failure() {
        let mut ctx = logged_in_as("alice", "alice123");
        let outcome = process_reset(&mut ctx, &ResetPasswordForm::new("abc12345", "abc12345")).unwrap();
        assert_eq!(
            outcome.message(),
            "Password must contain at least one uppercase letter"
        );
        assert_eq!(ctx.directory(), &seed_directory());
    }

    #[test]
    fn test_reset_rewrites_both_snapshots() {
        let mut ctx = logged_in_as("bob", "bob123");
        let outcome = process_reset(&mut ctx, &ResetPasswordForm::new("Abc123$5", "Abc123$5")).unwrap();

        assert!(outcome.is_updated());
        assert_eq!(outcome.message(), "Password updated successfully!");

        let session = gate::current_user(ctx.storage()).unwrap().unwrap();
        assert_eq!(session, User::new(2, "bob", "Abc123$5"));

        let persisted = load_directory(ctx.storage(), &UsersData::default()).unwrap();
        assert_eq!(persisted.find_by_id(2).unwrap().password, "Abc123$5");
        assert_eq!(persisted.find_by_id(1).unwrap().password, "alice123");
        assert_eq!(&persisted, ctx.directory());
    }

    #[test]
    fn test_new_password_used_for_next_login() {
        let mut ctx = logged_in_as("admin", "admin123");
        process_reset(&mut ctx, &ResetPasswordForm::new("Adm1n$pw", "Adm1n$pw")).unwrap();
        process_logout(&mut ctx).unwrap();

        assert!(process_login(&mut ctx, &LoginForm::new("admin", "admin123")).is_err());
        assert!(process_login(&mut ctx, &LoginForm::new("admin", "Adm1n$pw")).is_ok());
    }

    #[test]
    fn test_reset_for_user_missing_from_directory() {
        let mut ctx = context();
        gate::write_session(ctx.storage_mut(), &User::new(77, "ghost", "old")).unwrap();

        let outcome = process_reset(&mut ctx, &ResetPasswordForm::new("Gh0st$pw", "Gh0st$pw")).unwrap();
        assert!(outcome.is_updated());
        assert_eq!(ctx.directory(), &seed_directory());
        assert_eq!(
            gate::current_user(ctx.storage()).unwrap().unwrap().password,
            "Gh0st$pw"
        );
    }
}
