//! Error types for the student store.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`StoreError`]: Database initialization, query and write errors
//! - [`ValidationError`]: Student form validation errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Wraps the errors a [`crate::directory::StudentDirectory`] call can
/// produce. Configuration problems stay a [`ConfigError`], returned by
/// [`crate::config::Config::from_env`] before any store exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Storage errors.
///
/// Every store operation surfaces its failure through one of these
/// variants. None of them is retried inside the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be opened or its schema could not be set up.
    ///
    /// The store handle is unusable; this is fatal for the session.
    #[error("Store initialization failed at {stage}: {message}")]
    InitializationFailed {
        /// The initialization step that failed.
        stage: String,
        /// Description of the failure.
        message: String,
    },

    /// A read failed. Store state is unchanged.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed.
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// A mutation failed. The single statement was not applied.
    #[error("Write failed: {statement} - {message}")]
    WriteFailed {
        /// The statement that failed.
        statement: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StoreError {
    /// Returns true if the caller may reasonably retry the operation.
    ///
    /// Reads and writes are retryable at the caller's discretion.
    /// Initialization failures are fatal.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::QueryFailed { .. } | Self::WriteFailed { .. })
    }
}

/// Student form validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A field had a value that could not be accepted.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// The field name.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },
}

/// Configuration errors.
///
/// Every configuration value has a default, so the only failure is a value
/// that is present but out of range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
