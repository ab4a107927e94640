use super::*;

// =============================================================================
// MemoryStorage
// =============================================================================

#[test]
fn memory_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert!(storage.get("token").unwrap().is_none());
}

#[test]
fn memory_set_then_get() {
    let mut storage = MemoryStorage::new();
    storage.set("token", "abc").unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));
}

#[test]
fn memory_set_replaces_value() {
    let mut storage = MemoryStorage::new();
    storage.set("token", "old").unwrap();
    storage.set("token", "new").unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("new"));
}

#[test]
fn memory_remove_is_idempotent() {
    let mut storage = MemoryStorage::new();
    storage.set("token", "abc").unwrap();
    storage.remove("token").unwrap();
    storage.remove("token").unwrap();
    assert!(storage.get("token").unwrap().is_none());
}

// =============================================================================
// FileStorage
// =============================================================================

#[test]
fn file_get_before_any_write_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("not-yet-created"));
    assert!(storage.get("token").unwrap().is_none());
}

#[test]
fn file_set_creates_directory_and_persists_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let state_dir = dir.path().join("state");
    let mut storage = FileStorage::new(&state_dir);
    storage.set("token", "mock-token-1").unwrap();

    assert_eq!(fs::read_to_string(state_dir.join("token")).unwrap(), "mock-token-1");
    assert!(!state_dir.join(".token.tmp").exists());
}

#[test]
fn file_value_survives_new_instance() {
    let dir = tempfile::tempdir().unwrap();
    FileStorage::new(dir.path()).set("token", "abc").unwrap();

    let reopened = FileStorage::new(dir.path());
    assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc"));
}

#[test]
fn file_remove_missing_key_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.remove("token").unwrap();
}

#[test]
fn file_remove_deletes_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set("token", "abc").unwrap();
    storage.remove("token").unwrap();
    assert!(storage.get("token").unwrap().is_none());
}

#[test]
fn file_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    assert!(matches!(storage.set("../escape", "x"), Err(StorageError::InvalidKey(_))));
    assert!(matches!(storage.get("a/b"), Err(StorageError::InvalidKey(_))));
    assert!(matches!(storage.remove(""), Err(StorageError::InvalidKey(_))));
    assert!(matches!(storage.get(".hidden"), Err(StorageError::InvalidKey(_))));
}

#[test]
fn file_dir_reports_root() {
    let storage = FileStorage::new("/tmp/admin-console-state");
    assert_eq!(storage.dir(), Path::new("/tmp/admin-console-state"));
}
