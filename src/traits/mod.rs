//! Trait definitions for mockable dependencies.
//!
//! This module defines [`RecordStore`], the gateway between callers and
//! persisted student rows.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates a mock implementation automatically for testing.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::storage::{StudentFields, StudentId, StudentRecord};

/// Student record store.
///
/// Abstracts the persistence backend so the directory facade can be
/// tested with a mock. Operations on missing ids are no-ops reported
/// through the return value, never errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All students, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QueryFailed`] if the read fails.
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError>;

    /// A single student, or `None` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QueryFailed`] if the read fails.
    async fn get(&self, id: StudentId) -> Result<Option<StudentRecord>, StoreError>;

    /// Insert a student and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] if the insert fails.
    async fn create(&self, fields: &StudentFields) -> Result<StudentId, StoreError>;

    /// Replace a student's fields. Returns `false` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] if the update fails.
    async fn update(&self, id: StudentId, fields: &StudentFields) -> Result<bool, StoreError>;

    /// Delete a student. Returns `false` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] if the delete fails.
    async fn delete(&self, id: StudentId) -> Result<bool, StoreError>;

    /// Delete every student and return the number removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] if the delete fails.
    async fn delete_all(&self) -> Result<u64, StoreError>;
}
