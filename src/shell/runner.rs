//! Shell session loop
//!
//! Reads command lines, dispatches them and writes the answers until QUIT
//! or end of input.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use super::commands::{CommandStatus, parse_command};
use super::handlers::handle_command;
use super::responses::{READY, UNKNOWN_COMMAND, format_response};
use crate::session::AuthContext;
use crate::storage::Storage;

/// Runs the shell over `input`/`output` until QUIT or end of input.
///
/// Lines longer than the context's `max_input_length` characters, or not
/// valid UTF-8, are refused without being parsed and the loop carries on.
pub fn run_shell<S, R, W>(ctx: &mut AuthContext<S>, mut input: R, mut output: W) -> io::Result<()>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    let max_input_length = ctx.limits().max_input_length;

    output.write_all(format_response(READY, "authgate ready").as_bytes())?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Dropping command line that is not valid UTF-8: {}", e);
                output.write_all(format_response(UNKNOWN_COMMAND, "Command is not valid UTF-8").as_bytes())?;
                output.flush()?;
                continue;
            }
        };
        let trimmed = line.trim_end_matches(['\r', '\n']);

        if trimmed.trim().is_empty() {
            continue;
        }

        if trimmed.chars().count() > max_input_length {
            output.write_all(format_response(UNKNOWN_COMMAND, "Command too long").as_bytes())?;
            output.flush()?;
            continue;
        }

        let command = parse_command(trimmed);
        debug!("Received {}", command.name());

        let result = handle_command(ctx, &command);
        output.write_all(result.message.as_bytes())?;
        output.flush()?;

        if result.status == CommandStatus::Close {
            info!("Shell closed by QUIT");
            return Ok(());
        }
    }

    info!("End of input, shell closed");
    Ok(())
}
