//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the shell
///
/// `RUST_LOG` wins; otherwise `default_level` from the configuration is used.
/// Log lines go to stderr so they never mix with shell answers on stdout.
pub fn setup_logging(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .try_init();
}
