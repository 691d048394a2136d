//! Student Store
//!
//! A local record store for student records, backed by an embedded
//! `SQLite` file.
//!
//! # Features
//!
//! - Idempotent schema initialization with write-ahead journaling
//! - Create, list, update, delete and delete-all over student records
//! - Store-assigned ids that are never reused
//! - A directory facade that returns the post-mutation state from every
//!   write and broadcasts change events
//! - Form validation kept ahead of the store boundary
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  StudentForm   ┌──────────────────┐  StudentFields  ┌─────────────┐
//! │ Presentation │───────────────▶│ StudentDirectory │────────────────▶│ SqliteStore │──▶ SQLite (WAL)
//! │   (caller)   │◀───────────────│ validate+refresh │◀────────────────│ RecordStore │
//! └──────────────┘  Refreshed<T>  └──────────────────┘                 └─────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod storage;
pub mod traits;
pub mod validation;
