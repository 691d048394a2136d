//! Student form validation.
//!
//! The store persists whatever it is given. Domain rules live here, ahead
//! of the store boundary: every field must be filled in and the age must
//! be a whole number. Text values pass through untouched.
//!
//! # Example
//!
//! ```
//! use student_store::validation::{validate, StudentForm};
//!
//! let form = StudentForm::new("John", "Doe", "20", "john.doe@example.com");
//! let fields = validate(&form).expect("form is complete");
//! assert_eq!(fields.age, 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storage::{StudentFields, StudentRecord};

/// Field name used in errors for the first name.
pub const FIELD_FIRST_NAME: &str = "first_name";
/// Field name used in errors for the last name.
pub const FIELD_LAST_NAME: &str = "last_name";
/// Field name used in errors for the age.
pub const FIELD_AGE: &str = "age";
/// Field name used in errors for the email.
pub const FIELD_EMAIL: &str = "email";

/// Raw student input, as text, exactly as a form collects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Age, still unparsed.
    pub age: String,
    /// Email address.
    pub email: String,
}

impl StudentForm {
    /// Create a form from raw values.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: age.into(),
            email: email.into(),
        }
    }

    /// Pre-fill a form from an existing record, for editing.
    #[must_use]
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            age: record.age.to_string(),
            email: record.email.clone(),
        }
    }
}

/// Validate a form and convert it into storable fields.
///
/// Fields are checked in form order; the first problem is reported.
///
/// # Errors
///
/// - [`ValidationError::MissingField`] if any field is empty
/// - [`ValidationError::InvalidValue`] if the age is not a whole number
pub fn validate(form: &StudentForm) -> Result<StudentFields, ValidationError> {
    require(FIELD_FIRST_NAME, &form.first_name)?;
    require(FIELD_LAST_NAME, &form.last_name)?;
    require(FIELD_AGE, &form.age)?;
    require(FIELD_EMAIL, &form.email)?;

    let age = form
        .age
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidValue {
            field: FIELD_AGE.into(),
            reason: format!("'{}' is not a whole number", form.age),
        })?;

    Ok(StudentFields {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        age,
        email: form.email.clone(),
    })
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField {
            field: field.into(),
        });
    }
    Ok(())
}
