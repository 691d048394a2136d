//! Student record operations.
//!
//! Each operation is a single statement, so a failed write leaves no
//! partial row behind. Missing ids are reported through the return value
//! rather than as errors.

#![allow(clippy::missing_errors_doc)]

use crate::error::StoreError;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::core::SqliteStore;
use super::types::{StudentFields, StudentId, StudentRecord};

impl SqliteStore {
    /// All persisted students, in insertion (id) order.
    pub async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, firstname, lastname, age, email FROM students ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT students", &e))?;

        rows.iter()
            .map(|row| Self::row_to_record("SELECT students", row))
            .collect()
    }

    /// Get a single student by id.
    pub async fn get(&self, id: StudentId) -> Result<Option<StudentRecord>, StoreError> {
        let row = sqlx::query("SELECT id, firstname, lastname, age, email FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT students by id", &e))?;

        row.as_ref()
            .map(|row| Self::row_to_record("SELECT students by id", row))
            .transpose()
    }

    /// Number of persisted students.
    pub async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::query_error("COUNT students", &e))?;

        u64::try_from(count).map_err(|e| StoreError::Internal {
            message: format!("Negative row count {count}: {e}"),
        })
    }

    /// Insert a student and return its newly assigned id.
    pub async fn create(&self, fields: &StudentFields) -> Result<StudentId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO students (firstname, lastname, age, email) VALUES (?, ?, ?, ?)",
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(fields.age)
        .bind(&fields.email)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::write_error("INSERT students", &e))?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "student created");
        Ok(id)
    }

    /// Replace every non-id field of a student.
    ///
    /// Returns `false` without touching the store when `id` does not exist.
    pub async fn update(&self, id: StudentId, fields: &StudentFields) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE students SET firstname = ?, lastname = ?, age = ?, email = ? WHERE id = ?",
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(fields.age)
        .bind(&fields.email)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::write_error("UPDATE students", &e))?;

        let updated = result.rows_affected() > 0;
        tracing::debug!(id, updated, "student update");
        Ok(updated)
    }

    /// Delete a student. Returns `false` if there was nothing to delete.
    pub async fn delete(&self, id: StudentId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("DELETE students", &e))?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(id, deleted, "student delete");
        Ok(deleted)
    }

    /// Delete every student and return how many rows were removed.
    ///
    /// Id assignment is not reset.
    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM students")
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("DELETE all students", &e))?;

        let removed = result.rows_affected();
        tracing::debug!(removed, "all students deleted");
        Ok(removed)
    }

    /// Decode a row, reporting malformed data as a failed read.
    ///
    /// Columns are nullable and untyped in `SQLite`, so another writer
    /// sharing the file can leave values this store cannot represent.
    fn row_to_record(query: &str, row: &SqliteRow) -> Result<StudentRecord, StoreError> {
        Ok(StudentRecord {
            id: Self::column(query, row, "id")?,
            first_name: Self::column(query, row, "firstname")?,
            last_name: Self::column(query, row, "lastname")?,
            age: Self::column(query, row, "age")?,
            email: Self::column(query, row, "email")?,
        })
    }

    fn column<T>(query: &str, row: &SqliteRow, name: &str) -> Result<T, StoreError>
    where
        T: for<'r> sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
    {
        let value: Option<T> = row
            .try_get(name)
            .map_err(|e| Self::query_error(query, &e))?;

        value.ok_or_else(|| {
            tracing::warn!(query, column = name, "student row has NULL column");
            StoreError::QueryFailed {
                query: query.to_string(),
                message: format!("column {name} is NULL"),
            }
        })
    }
}
