// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

fn exercise(storage: &dyn Storage) {
    assert_eq!(storage.get("authToken").unwrap(), None);

    storage.set("authToken", "tok-1").unwrap();
    storage.set("user", "{\"id\":\"u1\"}").unwrap();
    assert_eq!(storage.get("authToken").unwrap().as_deref(), Some("tok-1"));

    storage.set("authToken", "tok-2").unwrap();
    assert_eq!(storage.get("authToken").unwrap().as_deref(), Some("tok-2"));

    storage.remove("authToken").unwrap();
    assert_eq!(storage.get("authToken").unwrap(), None);
    assert!(storage.get("user").unwrap().is_some());

    // Removing twice is fine
    storage.remove("authToken").unwrap();
}

#[test]
fn test_memory_storage() {
    exercise(&MemoryStorage::new());
}

#[test]
fn test_file_storage() {
    let temp = TempDir::new().unwrap();
    exercise(&FileStorage::new(temp.path().join("state")));
}

#[test]
fn test_file_storage_persists_across_instances() {
    let temp = TempDir::new().unwrap();
    FileStorage::new(temp.path()).set("authToken", "abc").unwrap();

    let reopened = FileStorage::new(temp.path());
    assert_eq!(reopened.get("authToken").unwrap().as_deref(), Some("abc"));
}

#[test]
fn test_file_storage_remove_without_file_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path().join("state"));
    storage.remove("user").unwrap();
    assert!(!storage.path().exists());
}

#[test]
fn test_file_storage_writes_json_object() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.set("authToken", "abc").unwrap();

    let raw = std::fs::read_to_string(storage.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["authToken"], "abc");
}

#[test]
fn test_file_storage_corrupt_file_is_error() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    std::fs::write(storage.path(), "not json").unwrap();

    let err = storage.get("authToken").unwrap_err();
    assert!(err.to_string().contains("corrupt session file"));
}

#[cfg(unix)]
#[test]
fn test_file_storage_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("state");
    let storage = FileStorage::new(&dir);
    storage.set("authToken", "secret").unwrap();
    // Rewrites keep the mode
    storage.set("user", "{}").unwrap();

    let file_mode = fs::metadata(storage.path()).unwrap().permissions().mode();
    assert_eq!(file_mode & 0o777, 0o600);
    let dir_mode = fs::metadata(&dir).unwrap().permissions().mode();
    assert_eq!(dir_mode & 0o777, 0o700);
}
