//! Session result types
//!
//! Defines result structures returned by session operations.

use crate::auth::PasswordValidation;
use crate::directory::User;

pub const MSG_PASSWORD_UPDATED: &str = "Password updated successfully!";

/// Result of a login operation
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
}

/// Result of a logout operation
#[derive(Debug, Clone)]
pub struct LogoutResult {
    pub was_logged_in: bool,
}

/// Outcome of a password reset attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Password changed; both snapshots rewritten
    Updated { user: User, message: String },
    /// Mismatch or policy failure; nothing written
    Rejected(PasswordValidation),
    NoSession,
}

impl ResetOutcome {
    pub fn message(&self) -> &str {
        match self {
            ResetOutcome::Updated { message, .. } => message,
            ResetOutcome::Rejected(validation) => &validation.message,
            ResetOutcome::NoSession => "Please log in first",
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, ResetOutcome::Updated { .. })
    }
}
