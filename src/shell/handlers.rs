//! Command handlers for the authgate shell.
//!
//! Each handler turns one parsed command into calls on the auth core and a
//! single coded answer line.

use log::info;

use super::commands::{Command, CommandResult, CommandStatus};
use super::responses::*;
use crate::auth::{LoginForm, ResetPasswordForm, validate_password};
use crate::error::{AppError, AuthError};
use crate::error::handlers::{error_to_message, handle_error};
use crate::session::{self, AuthContext, ResetOutcome};
use crate::storage::Storage;

const HELP_TEXT: &str =
    "Commands: LOGIN <user> <password>, LOGOUT, WHOAMI, RESET <new> <confirm>, CHECK <password>, HELP, QUIT";

/// Dispatches a parsed command to its handler.
pub fn handle_command<S: Storage>(ctx: &mut AuthContext<S>, command: &Command) -> CommandResult {
    match command {
        Command::LOGIN { username, password } => handle_cmd_login(ctx, username, password),
        Command::LOGOUT => handle_cmd_logout(ctx),
        Command::WHOAMI => handle_cmd_whoami(ctx),
        Command::RESET {
            new_password,
            confirm_password,
        } => handle_cmd_reset(ctx, new_password, confirm_password),
        Command::CHECK(password) => handle_cmd_check(password),
        Command::HELP => success(HELP, HELP_TEXT),
        Command::QUIT => CommandResult {
            status: CommandStatus::Close,
            message: format_response(GOODBYE, "Goodbye"),
        },
        Command::UNKNOWN => failure(UNKNOWN_COMMAND, "Unknown command"),
    }
}

/// Refuses protected commands when no session is present.
fn require_auth<S: Storage>(ctx: &AuthContext<S>) -> Result<(), CommandResult> {
    if ctx.is_authenticated() {
        Ok(())
    } else {
        Err(error_result(&AuthError::NotLoggedIn.into()))
    }
}

fn handle_cmd_login<S: Storage>(ctx: &mut AuthContext<S>, username: &str, password: &str) -> CommandResult {
    match session::process_login(ctx, &LoginForm::new(username, password)) {
        Ok(result) => success(
            LOGIN_SUCCESS,
            &format!("Welcome, {}!", result.user.username),
        ),
        Err(e) => error_result(&e),
    }
}

fn handle_cmd_logout<S: Storage>(ctx: &mut AuthContext<S>) -> CommandResult {
    match session::process_logout(ctx) {
        Ok(result) if result.was_logged_in => success(OK, "Logged out"),
        Ok(_) => success(OK, "Not logged in"),
        Err(e) => error_result(&e),
    }
}

fn handle_cmd_whoami<S: Storage>(ctx: &AuthContext<S>) -> CommandResult {
    if let Err(denied) = require_auth(ctx) {
        return denied;
    }

    match session::current_user(ctx.storage()) {
        Ok(Some(user)) => success(OK, &format!("{} (id {})", user.username, user.id)),
        Ok(None) => error_result(&AuthError::NotLoggedIn.into()),
        Err(e) => error_result(&AppError::from(e)),
    }
}

fn handle_cmd_reset<S: Storage>(
    ctx: &mut AuthContext<S>,
    new_password: &str,
    confirm_password: &str,
) -> CommandResult {
    if let Err(denied) = require_auth(ctx) {
        return denied;
    }

    let form = ResetPasswordForm::new(new_password, confirm_password);
    match session::process_reset(ctx, &form) {
        Ok(outcome @ ResetOutcome::Updated { .. }) => success(OK, outcome.message()),
        Ok(outcome @ ResetOutcome::Rejected(_)) => failure(REJECTED, outcome.message()),
        Ok(ResetOutcome::NoSession) => error_result(&AuthError::NotLoggedIn.into()),
        Err(e) => error_result(&e),
    }
}

fn handle_cmd_check(password: &str) -> CommandResult {
    let validation = validate_password(password);
    if validation.is_valid {
        success(OK, &validation.message)
    } else {
        failure(REJECTED, &validation.message)
    }
}

fn success(code: u16, message: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: format_response(code, message),
    }
}

fn failure(code: u16, message: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure(message.to_string()),
        message: format_response(code, message),
    }
}

fn error_result(err: &AppError) -> CommandResult {
    let code = match err {
        AppError::Auth(AuthError::MalformedInput(_)) => REJECTED,
        AppError::Auth(_) => AUTH_REQUIRED,
        AppError::Storage(_) | AppError::Config(_) | AppError::IoError(_) => STORAGE_UNAVAILABLE,
    };

    if code == STORAGE_UNAVAILABLE {
        handle_error(err);
    } else {
        info!("Command refused: {}", err);
    }

    failure(code, &error_to_message(err))
}
