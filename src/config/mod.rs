//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use student_store::config::{Config, DEFAULT_DATABASE_PATH};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: DEFAULT_DATABASE_PATH.to_string(),
//!     log_level: "info".to_string(),
//!     max_connections: 5,
//!     busy_timeout_ms: 5_000,
//! };
//!
//! println!("Using store: {}", config.database_path);
//! ```

mod validation;

pub use validation::{
    parse_log_level, validate_config, LOG_LEVELS, MAX_BUSY_TIMEOUT_MS, MAX_CONNECTIONS, MIN_CONNECTIONS,
};

use crate::error::ConfigError;

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/students.db";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default pool size for file-backed stores.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time a connection waits on a locked database.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Store configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables,
/// or [`Config::default`] for the canonical store file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the store file.
    pub database_path: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Maximum pooled connections for file-backed stores.
    pub max_connections: u32,
    /// How long a connection waits on a locked database, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to the `SQLite` store (default: `./data/students.db`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    ///
    /// Pool settings are not read from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any value fails validation
    /// (see [`validate_config`]).
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let config = Self {
            database_path,
            log_level,
            ..Self::default()
        };

        validate_config(&config)?;
        Ok(config)
    }
}
