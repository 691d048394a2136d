//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Accepted log levels.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Minimum pool size.
pub const MIN_CONNECTIONS: u32 = 1;

/// Maximum pool size.
pub const MAX_CONNECTIONS: u32 = 16;

/// Maximum busy timeout in milliseconds (1 minute).
pub const MAX_BUSY_TIMEOUT_MS: u64 = 60_000;

/// Normalize a log level to its entry in [`LOG_LEVELS`].
///
/// Matching ignores case. Anything else, including `EnvFilter` directives
/// such as `student_store=debug`, yields `None`.
#[must_use]
pub fn parse_log_level(level: &str) -> Option<&'static str> {
    LOG_LEVELS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(level))
}

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `DATABASE_PATH` must not be empty
/// - `LOG_LEVEL` must be one of [`LOG_LEVELS`] (case-insensitive)
/// - `max_connections` must be between 1 and 16
/// - `busy_timeout_ms` must be at most 60000
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    if parse_log_level(&config.log_level).is_none() {
        return Err(ConfigError::InvalidValue {
            var: "LOG_LEVEL".into(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }

    if !(MIN_CONNECTIONS..=MAX_CONNECTIONS).contains(&config.max_connections) {
        return Err(ConfigError::InvalidValue {
            var: "max_connections".into(),
            reason: format!("must be between {MIN_CONNECTIONS} and {MAX_CONNECTIONS}"),
        });
    }

    if config.busy_timeout_ms > MAX_BUSY_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "busy_timeout_ms".into(),
            reason: format!("must be at most {MAX_BUSY_TIMEOUT_MS} ms"),
        });
    }

    Ok(())
}
