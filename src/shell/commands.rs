//! Module `commands`
//!
//! Shell command parsing and the data structures describing a command's
//! outcome.

/// A command parsed from one input line.
///
/// Commands that require arguments store them in the variant.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    LOGIN { username: String, password: String },
    LOGOUT,
    WHOAMI,
    RESET { new_password: String, confirm_password: String },
    CHECK(String), // Run the password policy only
    HELP,
    QUIT,
    UNKNOWN, // Unknown command or wrong arguments
}

impl Command {
    /// Verb for logging. Never includes arguments, which may be passwords.
    pub fn name(&self) -> &'static str {
        match self {
            Command::LOGIN { .. } => "LOGIN",
            Command::LOGOUT => "LOGOUT",
            Command::WHOAMI => "WHOAMI",
            Command::RESET { .. } => "RESET",
            Command::CHECK(_) => "CHECK",
            Command::HELP => "HELP",
            Command::QUIT => "QUIT",
            Command::UNKNOWN => "UNKNOWN",
        }
    }
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Close,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: String,
}

/// Parses a raw input line into a `Command`.
///
/// The verb is case-insensitive. A known verb with the wrong number of
/// arguments is `UNKNOWN`. The CHECK argument is everything after the
/// single separator following the verb, whitespace included.
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    let mut parts = line.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("");
    let args: Vec<&str> = arg.split_whitespace().collect();

    match (cmd.as_str(), args.as_slice()) {
        ("LOGIN", [username, password]) => Command::LOGIN {
            username: username.to_string(),
            password: password.to_string(),
        },
        ("LOGOUT", []) => Command::LOGOUT,
        ("WHOAMI", []) => Command::WHOAMI,
        ("RESET", [new_password, confirm_password]) => Command::RESET {
            new_password: new_password.to_string(),
            confirm_password: confirm_password.to_string(),
        },
        ("CHECK", [_, ..]) => Command::CHECK(arg.to_string()),
        ("HELP", []) => Command::HELP,
        ("QUIT" | "Q", []) => Command::QUIT,
        _ => Command::UNKNOWN,
    }
}
