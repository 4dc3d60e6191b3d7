//! Terminal shell
//!
//! A line-oriented stand-in for the browser UI: it parses commands, calls
//! into the auth core and answers with one coded line per command.

pub mod commands;
pub mod handlers;
pub mod responses;
pub mod runner;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handlers::handle_command;
pub use runner::run_shell;
