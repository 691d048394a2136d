//! Schema initialization.
//!
//! Runs on every open. Enables write-ahead journaling, creates the
//! `students` table when missing, then checks that the table carries the
//! expected columns. Each step is idempotent.

use std::collections::HashSet;

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use super::core::SqliteStore;
use crate::error::StoreError;

/// Initial schema, the only migration.
const SCHEMA_001: &str = include_str!("../../migrations/001_students.sql");

/// Columns the `students` table must provide.
pub const STUDENT_COLUMNS: [&str; 5] = ["id", "firstname", "lastname", "age", "email"];

/// Ensure the store is ready for record operations.
///
/// # Errors
///
/// Returns [`StoreError::InitializationFailed`] naming the step that failed.
pub async fn initialize(pool: &SqlitePool) -> Result<(), StoreError> {
    enable_wal(pool).await?;

    sqlx::query(SCHEMA_001)
        .execute(pool)
        .await
        .map_err(|e| SqliteStore::init_error("migration 001", format!("{e}")))?;

    verify_columns(pool).await?;

    tracing::debug!("student schema ready");
    Ok(())
}

async fn enable_wal(pool: &SqlitePool) -> Result<(), StoreError> {
    let mode: String = sqlx::query_scalar("PRAGMA journal_mode = WAL")
        .fetch_one(pool)
        .await
        .map_err(|e| SqliteStore::init_error("journal mode", format!("{e}")))?;

    // In-memory databases cannot use WAL and report "memory".
    match mode.to_ascii_lowercase().as_str() {
        "wal" | "memory" => Ok(()),
        other => Err(SqliteStore::init_error(
            "journal mode",
            format!("expected wal, store reported {other}"),
        )),
    }
}

async fn verify_columns(pool: &SqlitePool) -> Result<(), StoreError> {
    let rows = sqlx::query("PRAGMA table_info(students)")
        .fetch_all(pool)
        .await
        .map_err(|e| SqliteStore::init_error("verify schema", format!("{e}")))?;

    let mut present = HashSet::new();
    for row in &rows {
        let name: String = row
            .try_get("name")
            .map_err(|e| SqliteStore::init_error("verify schema", format!("{e}")))?;
        present.insert(name.to_ascii_lowercase());
    }

    let missing: Vec<&str> = STUDENT_COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.contains(*column))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SqliteStore::init_error(
            "verify schema",
            format!("students table is missing columns: {}", missing.join(", ")),
        ))
    }
}
