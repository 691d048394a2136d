//! Core `SQLite` storage implementation.
//!
//! This module provides the [`SqliteStore`] handle, connection setup and
//! the error helpers shared by the record operations.

#![allow(clippy::missing_errors_doc)]

use crate::config::Config;
use crate::error::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use super::schema;

/// `SQLite` record store.
///
/// A handle only exists once the schema has been initialized, so every
/// method on it operates on a ready store. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pub(crate) pool: SqlitePool,
}

impl SqliteStore {
    /// Get a clone of the connection pool.
    #[must_use]
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Open the store file at `database_path` and initialize its schema.
    ///
    /// Parent directories are created if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InitializationFailed`] if the file cannot be
    /// opened or the schema cannot be set up.
    pub async fn open(database_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let defaults = Config::default();
        Self::open_file(
            database_path.as_ref(),
            defaults.max_connections,
            defaults.busy_timeout_ms,
        )
        .await
    }

    /// Open the store described by `config` and initialize its schema.
    pub async fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::open_file(
            Path::new(&config.database_path),
            config.max_connections,
            config.busy_timeout_ms,
        )
        .await
    }

    async fn open_file(
        path: &Path,
        max_connections: u32,
        busy_timeout_ms: u64,
    ) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Self::init_error("create directory", format!("{}: {e}", parent.display()))
                })?;
            }
        }

        // sqlx refuses file names that are not valid UTF-8.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_millis(busy_timeout_ms));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| Self::init_error("connect", format!("{e}")))?;

        let store = Self { pool };
        store.initialize().await?;

        tracing::info!(path = %path.display(), "student store opened");
        Ok(store)
    }

    /// Create a new in-memory store, mostly for testing.
    ///
    /// Uses a single connection that is never recycled, since each
    /// in-memory connection would otherwise see its own empty database.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| Self::init_error("connect", format!("invalid memory options: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| Self::init_error("connect", format!("{e}")))?;

        let store = Self { pool };
        store.initialize().await?;

        tracing::debug!("in-memory student store opened");
        Ok(store)
    }

    /// Re-run schema initialization.
    ///
    /// Safe on every open: existing rows and structure are left untouched.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        schema::initialize(&self.pool).await
    }

    /// Current journal mode as reported by `SQLite`.
    pub async fn journal_mode(&self) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("PRAGMA journal_mode")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::query_error("PRAGMA journal_mode", &e))
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub(crate) fn init_error(stage: &str, message: String) -> StoreError {
        tracing::warn!(stage, %message, "store initialization failed");
        StoreError::InitializationFailed {
            stage: stage.to_string(),
            message,
        }
    }

    pub(crate) fn query_error(query: &str, err: &sqlx::Error) -> StoreError {
        tracing::warn!(query, error = %err, "store query failed");
        StoreError::QueryFailed {
            query: query.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write_error(statement: &str, err: &sqlx::Error) -> StoreError {
        tracing::warn!(statement, error = %err, "store write failed");
        StoreError::WriteFailed {
            statement: statement.to_string(),
            message: err.to_string(),
        }
    }
}
