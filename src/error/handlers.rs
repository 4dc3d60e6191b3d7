//! Error handlers
//!
//! Logs errors and turns them into messages the shell can show.

use crate::error::types::{AppError, AuthError};
use log::error;

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("authgate error: {}", err);
}

/// Convert error to a user-facing message
pub fn error_to_message(err: &AppError) -> String {
    match err {
        AppError::Auth(AuthError::InvalidCredentials(_)) => "Invalid username or password".into(),
        AppError::Auth(AuthError::MalformedInput(reason)) => reason.clone(),
        AppError::Auth(AuthError::NotLoggedIn) => "Please log in first".into(),
        AppError::Storage(_) => "Storage is unavailable, try again".into(),
        AppError::Config(_) => "Configuration error".into(),
        AppError::IoError(_) => "I/O error".into(),
    }
}
