//! Error recovery and edge case tests.

use serial_test::serial;
use student_store::error::StoreError;
use student_store::storage::{SqliteStore, StudentFields};
use tempfile::TempDir;

use super::create_test_store;

#[tokio::test]
#[serial]
async fn test_open_non_database_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("notes.db");
    std::fs::write(&db_path, "plain text, definitely not sqlite\n".repeat(300)).expect("write");

    let err = SqliteStore::open(&db_path).await.expect_err("should fail");
    assert!(matches!(err, StoreError::InitializationFailed { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
#[serial]
async fn test_update_missing_id_leaves_store_unchanged() {
    let (store, _temp_dir) = create_test_store().await;
    store
        .create(&StudentFields::new("John", "Doe", 20, "john.doe@example.com"))
        .await
        .expect("create");
    let before = store.list_all().await.expect("list");

    let updated = store
        .update(999_999, &StudentFields::new("X", "Y", 1, "z"))
        .await
        .expect("update should not error");

    assert!(!updated);
    assert_eq!(store.list_all().await.expect("list"), before);
}

#[tokio::test]
#[serial]
async fn test_failed_write_is_surfaced_and_recoverable() {
    let (store, _temp_dir) = create_test_store().await;
    sqlx::query("DROP TABLE students")
        .execute(&store.get_pool())
        .await
        .expect("drop");

    let err = store
        .create(&StudentFields::new("John", "Doe", 20, "john.doe@example.com"))
        .await
        .expect_err("write should fail");
    assert!(matches!(err, StoreError::WriteFailed { .. }));
    assert!(err.is_retryable());

    let err = store.list_all().await.expect_err("read should fail");
    assert!(matches!(err, StoreError::QueryFailed { .. }));

    // Re-initializing restores a usable, empty store.
    store.initialize().await.expect("initialize");
    let id = store
        .create(&StudentFields::new("John", "Doe", 20, "john.doe@example.com"))
        .await
        .expect("retry create");
    assert_eq!(store.list_all().await.expect("list")[0].id, id);
}

#[tokio::test]
#[serial]
async fn test_operations_after_close_fail() {
    let (store, _temp_dir) = create_test_store().await;
    store.close().await;

    assert!(matches!(
        store.list_all().await,
        Err(StoreError::QueryFailed { .. })
    ));
    assert!(matches!(
        store.delete_all().await,
        Err(StoreError::WriteFailed { .. })
    ));
}
