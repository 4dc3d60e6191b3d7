//! Authentication result types
//!
//! Defines result structures returned by validation operations.

pub const MSG_VALID: &str = "Password is valid";
pub const MSG_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const MSG_NO_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const MSG_NO_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const MSG_NO_DIGIT: &str = "Password must contain at least one number";
pub const MSG_NO_SPECIAL: &str = "Password must contain at least one special character";
pub const MSG_HAS_WHITESPACE: &str = "Password cannot contain spaces";
pub const MSG_MISMATCH: &str = "Passwords do not match";

/// Result of password validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub message: String,
}

impl PasswordValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: MSG_VALID.to_string(),
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_string(),
        }
    }
}
