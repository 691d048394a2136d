//! Storage backend.
//!
//! This module provides:
//! - `SQLite` store handle and connection setup
//! - Schema initialization (write-ahead journaling, `students` table)
//! - Student record CRUD operations
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! Every operation is a single statement that commits before returning, so
//! sequential calls always observe each other's effects.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management and error helpers
//! - `schema`: Idempotent schema initialization
//! - `students`: Student CRUD operations
//! - `trait_impl`: [`RecordStore`](crate::traits::RecordStore) implementation
//!
//! # Example
//!
//! ```ignore
//! use student_store::storage::{SqliteStore, StudentFields};
//!
//! let store = SqliteStore::open("./data/students.db").await?;
//! let id = store.create(&StudentFields::new("John", "Doe", 20, "john.doe@example.com")).await?;
//! ```

mod core;
mod schema;
mod students;
mod trait_impl;
mod types;

pub use self::core::SqliteStore;
pub use schema::STUDENT_COLUMNS;
pub use types::{StudentFields, StudentId, StudentRecord};
