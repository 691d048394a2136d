//! Directory facade over a real store.

use pretty_assertions::assert_eq;
use serial_test::serial;
use student_store::directory::{DirectoryEvent, StudentDirectory};
use student_store::error::{AppError, ValidationError};
use student_store::validation::StudentForm;

use super::create_test_store;

#[tokio::test]
#[serial]
async fn test_every_mutation_returns_fresh_state() {
    let (store, _temp_dir) = create_test_store().await;
    let directory = StudentDirectory::new(store);
    let mut events = directory.subscribe();

    let added = directory
        .add(&StudentForm::new("John", "Doe", "20", "john.doe@example.com"))
        .await
        .expect("add John");
    assert_eq!(added.students.len(), 1);
    assert_eq!(added.students[0].id, added.value);

    let jane = directory
        .add(&StudentForm::new("Jane", "Smith", "22", "jane.smith@example.com"))
        .await
        .expect("add Jane");
    assert_eq!(jane.students.len(), 2);

    let current = directory.find(jane.value).await.expect("find").expect("exists");
    let mut form = StudentForm::from_record(&current);
    form.email = "jane@school.example".to_string();
    let edited = directory.edit(jane.value, &form).await.expect("edit");
    assert!(edited.value);
    assert_eq!(edited.students[1].email, "jane@school.example");

    let removed = directory.remove(added.value).await.expect("remove");
    assert!(removed.value);
    assert_eq!(removed.students.len(), 1);
    assert_eq!(removed.students[0].last_name, "Smith");

    let cleared = directory.remove_all().await.expect("remove all");
    assert_eq!(cleared.value, 1);
    assert!(cleared.students.is_empty());

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(
        seen,
        vec![
            DirectoryEvent::Created { id: added.value },
            DirectoryEvent::Created { id: jane.value },
            DirectoryEvent::Updated { id: jane.value },
            DirectoryEvent::Deleted { id: added.value },
            DirectoryEvent::Cleared { removed: 1 },
        ]
    );
}

#[tokio::test]
#[serial]
async fn test_incomplete_form_is_rejected_before_store() {
    let (store, _temp_dir) = create_test_store().await;
    let directory = StudentDirectory::new(store);

    let err = directory
        .add(&StudentForm::new("John", "", "20", "john.doe@example.com"))
        .await
        .expect_err("missing last name");
    assert_eq!(
        err,
        AppError::Validation(ValidationError::MissingField {
            field: "last_name".to_string()
        })
    );

    assert!(directory.students().await.expect("list").is_empty());
    assert_eq!(directory.store().count().await.expect("count"), 0);
}
