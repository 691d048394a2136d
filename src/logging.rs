//! Logging setup.
//!
//! The library only emits `tracing` events. Applications embedding the
//! store call [`init_logging`] once to print them to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::{parse_log_level, DEFAULT_LOG_LEVEL};

/// Install a stderr fmt subscriber filtered at `level`.
///
/// `level` is one of [`crate::config::LOG_LEVELS`], in any case; these are
/// the same values [`crate::config::validate_config`] accepts. Anything else
/// falls back to `info`. Returns `false` if a global subscriber was already
/// installed.
pub fn init_logging(level: &str) -> bool {
    let filter = EnvFilter::new(filter_level(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok()
}

fn filter_level(level: &str) -> &'static str {
    parse_log_level(level).unwrap_or(DEFAULT_LOG_LEVEL)
}
