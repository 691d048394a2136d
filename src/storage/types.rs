//! Storage types for database operations.
//!
//! - [`StudentFields`]: The replaceable part of a record
//! - [`StudentRecord`]: A persisted row, including its store-assigned id

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation.
pub type StudentId = i64;

/// Every field of a student except its id.
///
/// Used as the full replacement set for both create and update.
/// The store persists these values exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Age in years.
    pub age: i64,
    /// Email address, unconstrained format.
    pub email: String,
}

impl StudentFields {
    /// Create a new field set.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
        }
    }
}

/// Student stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Store-assigned identifier.
    pub id: StudentId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Age in years.
    pub age: i64,
    /// Email address.
    pub email: String,
}

impl StudentRecord {
    /// Build a record from an id and its fields.
    #[must_use]
    pub fn from_fields(id: StudentId, fields: StudentFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            age: fields.age,
            email: fields.email,
        }
    }

    /// The replaceable part of this record.
    #[must_use]
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            email: self.email.clone(),
        }
    }
}
