//! Persistence and schema lifecycle across store opens.

use serial_test::serial;
use student_store::config::Config;
use student_store::storage::{SqliteStore, StudentFields};
use tempfile::TempDir;

use super::create_test_store;

#[tokio::test]
#[serial]
async fn test_initialize_twice_keeps_schema_and_records() {
    let (store, _temp_dir) = create_test_store().await;
    store
        .create(&StudentFields::new("John", "Doe", 20, "john.doe@example.com"))
        .await
        .expect("create");

    store.initialize().await.expect("first re-initialize");
    store.initialize().await.expect("second re-initialize");

    assert_eq!(store.count().await.expect("count"), 1);
    assert_eq!(
        store.journal_mode().await.expect("journal mode").to_ascii_lowercase(),
        "wal"
    );
}

#[tokio::test]
#[serial]
async fn test_records_survive_reopen() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("students.db");

    {
        let store = SqliteStore::open(&db_path).await.expect("open");
        store
            .create(&StudentFields::new("Jane", "Smith", 22, "jane.smith@example.com"))
            .await
            .expect("create");
        store.close().await;
    }

    let store = SqliteStore::open(&db_path).await.expect("reopen");
    let students = store.list_all().await.expect("list");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].first_name, "Jane");
}

#[tokio::test]
#[serial]
async fn test_ids_continue_after_reopen() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("students.db");

    let last = {
        let store = SqliteStore::open(&db_path).await.expect("open");
        let fields = StudentFields::new("A", "B", 1, "c");
        store.create(&fields).await.expect("create");
        let last = store.create(&fields).await.expect("create");
        store.delete_all().await.expect("delete all");
        store.close().await;
        last
    };

    let store = SqliteStore::open(&db_path).await.expect("reopen");
    let next = store
        .create(&StudentFields::new("D", "E", 2, "f"))
        .await
        .expect("create");
    assert!(next > last);
}

#[tokio::test]
#[serial]
async fn test_two_handles_see_each_others_writes() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("shared.db");

    let writer = SqliteStore::open(&db_path).await.expect("open writer");
    let reader = SqliteStore::open(&db_path).await.expect("open reader");

    let id = writer
        .create(&StudentFields::new("John", "Doe", 20, "john.doe@example.com"))
        .await
        .expect("create");

    let seen = reader.list_all().await.expect("list");
    assert_eq!(seen.iter().map(|s| s.id).collect::<Vec<_>>(), vec![id]);
}

#[tokio::test]
#[serial]
async fn test_open_from_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = Config {
        database_path: temp_dir
            .path()
            .join("nested")
            .join("students.db")
            .display()
            .to_string(),
        max_connections: 1,
        ..Config::default()
    };

    let store = SqliteStore::from_config(&config).await.expect("open");
    assert!(store.list_all().await.expect("list").is_empty());
}
