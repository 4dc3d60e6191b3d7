//! Password policy
//!
//! Rules run in a fixed order and the first failure is reported, so each
//! attempt gets exactly one actionable message.

use std::sync::LazyLock;

use regex::Regex;

use super::forms::ResetPasswordForm;
use super::results::*;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").unwrap());

/// Checks `password` against the policy.
///
/// Order: length, lowercase, uppercase, digit, special character, then
/// whitespace. Length counts characters, not bytes.
pub fn validate_password(password: &str) -> PasswordValidation {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return PasswordValidation::invalid(MSG_TOO_SHORT);
    }

    let rules: [(&Regex, bool, &str); 5] = [
        (&*LOWERCASE, true, MSG_NO_LOWERCASE),
        (&*UPPERCASE, true, MSG_NO_UPPERCASE),
        (&*DIGIT, true, MSG_NO_DIGIT),
        (&*SPECIAL, true, MSG_NO_SPECIAL),
        (&*WHITESPACE, false, MSG_HAS_WHITESPACE),
    ];

    for (pattern, required, message) in rules {
        if pattern.is_match(password) != required {
            return PasswordValidation::invalid(message);
        }
    }

    PasswordValidation::valid()
}

/// Validates a reset form: the confirmation must match before the policy
/// is consulted at all.
pub fn validate_reset_form(form: &ResetPasswordForm) -> PasswordValidation {
    if form.new_password != form.confirm_password {
        return PasswordValidation::invalid(MSG_MISMATCH);
    }
    validate_password(&form.new_password)
}
