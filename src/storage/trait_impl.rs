//! `RecordStore` implementation for `SqliteStore`.

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::traits::RecordStore;

use super::core::SqliteStore;
use super::types::{StudentFields, StudentId, StudentRecord};

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        Self::list_all(self).await
    }

    async fn get(&self, id: StudentId) -> Result<Option<StudentRecord>, StoreError> {
        Self::get(self, id).await
    }

    async fn create(&self, fields: &StudentFields) -> Result<StudentId, StoreError> {
        Self::create(self, fields).await
    }

    async fn update(&self, id: StudentId, fields: &StudentFields) -> Result<bool, StoreError> {
        Self::update(self, id, fields).await
    }

    async fn delete(&self, id: StudentId) -> Result<bool, StoreError> {
        Self::delete(self, id).await
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        Self::delete_all(self).await
    }
}

/// Blanket implementation for `Arc<SqliteStore>` to allow sharing the store across tasks.
#[async_trait]
impl RecordStore for Arc<SqliteStore> {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        self.as_ref().list_all().await
    }

    async fn get(&self, id: StudentId) -> Result<Option<StudentRecord>, StoreError> {
        self.as_ref().get(id).await
    }

    async fn create(&self, fields: &StudentFields) -> Result<StudentId, StoreError> {
        self.as_ref().create(fields).await
    }

    async fn update(&self, id: StudentId, fields: &StudentFields) -> Result<bool, StoreError> {
        self.as_ref().update(id, fields).await
    }

    async fn delete(&self, id: StudentId) -> Result<bool, StoreError> {
        self.as_ref().delete(id).await
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        self.as_ref().delete_all().await
    }
}
