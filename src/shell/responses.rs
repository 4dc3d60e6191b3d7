//! Shell response codes
//!
//! Three-digit codes in the style of line protocols, so scripts can match
//! on the code and people can read the text.

pub const OK: u16 = 200;
pub const HELP: u16 = 214;
pub const GOODBYE: u16 = 221;
pub const READY: u16 = 220;
pub const LOGIN_SUCCESS: u16 = 230;
pub const STORAGE_UNAVAILABLE: u16 = 451;
pub const UNKNOWN_COMMAND: u16 = 500;
pub const REJECTED: u16 = 501;
pub const AUTH_REQUIRED: u16 = 530;

/// Format a response line
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\n", code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_response() {
        assert_eq!(format_response(OK, "Password is valid"), "200 Password is valid\n");
    }
}
