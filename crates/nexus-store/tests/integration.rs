use nexus_store::{FileStore, MemoryStore, RecordStore, StoreError, StoreOptions};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> FileStore {
    FileStore::open(dir.path(), StoreOptions::default()).unwrap()
}

#[test]
fn save_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let value = json!([{ "id": "EMP001", "fullName": "Jane Doe" }]);
    store.save("nexus_employees", &value).unwrap();

    let loaded = store.load("nexus_employees").unwrap();
    assert_eq!(loaded, Some(value));
}

#[test]
fn missing_entry_loads_as_absent() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    assert_eq!(store.load("auth_user").unwrap(), None);
}

#[test]
fn corrupt_entry_loads_as_absent() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    fs::write(dir.path().join("nexus_employees.json"), b"{not json").unwrap();
    assert_eq!(store.load("nexus_employees").unwrap(), None);
}

#[test]
fn save_replaces_previous_value() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    store.save("auth_user", &json!({ "id": "1" })).unwrap();
    store.save("auth_user", &json!({ "id": "2" })).unwrap();

    assert_eq!(store.load("auth_user").unwrap(), Some(json!({ "id": "2" })));
}

#[test]
fn remove_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    store.save("auth_user", &json!({ "id": "1" })).unwrap();
    store.remove("auth_user").unwrap();
    assert_eq!(store.load("auth_user").unwrap(), None);

    // Removing again is a no-op, not an error.
    store.remove("auth_user").unwrap();
}

#[test]
fn quota_breach_yields_storage_full_and_keeps_old_value() {
    let dir = TempDir::new().unwrap();
    let options = StoreOptions {
        quota: Some(64),
        ..StoreOptions::default()
    };
    let mut store = FileStore::open(dir.path(), options).unwrap();

    let small = json!({ "id": "1" });
    store.save("auth_user", &small).unwrap();

    let large = json!({ "id": "1", "blob": "x".repeat(200) });
    let err = store.save("auth_user", &large).unwrap_err();
    assert!(err.is_storage_full());

    // The last successfully persisted value remains on disk.
    assert_eq!(store.load("auth_user").unwrap(), Some(small));
}

#[test]
fn rejects_keys_with_path_characters() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let err = store.save("../escape", &json!(1)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidKey(_)));
    assert!(matches!(
        store.load("a/b").unwrap_err(),
        StoreError::InvalidKey(_)
    ));
}

#[test]
fn separate_keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    store.save("nexus_employees", &json!([])).unwrap();
    store.save("auth_user", &json!({ "id": "1" })).unwrap();
    store.remove("auth_user").unwrap();

    assert_eq!(store.load("nexus_employees").unwrap(), Some(json!([])));
    assert_eq!(store.load("auth_user").unwrap(), None);
}

#[test]
fn memory_store_counts_saves_and_enforces_quota() {
    let mut store = MemoryStore::with_quota(32);

    store.save("auth_user", &json!({ "id": "1" })).unwrap();
    assert_eq!(store.save_count(), 1);

    let err = store
        .save("auth_user", &json!({ "blob": "x".repeat(100) }))
        .unwrap_err();
    assert!(err.is_storage_full());
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.load("auth_user").unwrap(), Some(json!({ "id": "1" })));
}
