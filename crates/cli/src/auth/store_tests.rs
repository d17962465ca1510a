// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::auth::{FileStorage, MemoryStorage};

fn user() -> User {
    User {
        id: "u-1".to_string(),
        email: "analyst@example.org".to_string(),
        name: "Amina Diallo".to_string(),
    }
}

fn memory_store() -> (Arc<MemoryStorage>, AuthStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = AuthStore::new(storage.clone());
    (storage, store)
}

#[test]
fn test_fresh_store_is_not_authenticated() {
    let (_, store) = memory_store();
    assert!(!store.is_authenticated().unwrap());
    assert_eq!(store.token().unwrap(), None);
    assert_eq!(store.user().unwrap(), None);
}

#[test]
fn test_save_auth_then_read_back() {
    let (_, store) = memory_store();
    store.save_auth("tok", &user()).unwrap();

    assert!(store.is_authenticated().unwrap());
    assert_eq!(store.token().unwrap().as_deref(), Some("tok"));
    assert_eq!(store.user().unwrap(), Some(user()));
}

#[test]
fn test_logout_clears_both_keys() {
    let (storage, store) = memory_store();
    store.save_auth("tok", &user()).unwrap();
    store.logout().unwrap();

    assert!(!store.is_authenticated().unwrap());
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
}

#[test]
fn test_authenticated_iff_token_present() {
    let (storage, store) = memory_store();

    // A user record alone is not a session
    storage.set(USER_KEY, &serde_json::to_string(&user()).unwrap()).unwrap();
    assert!(!store.is_authenticated().unwrap());

    // A token alone is
    storage.remove(USER_KEY).unwrap();
    storage.set(TOKEN_KEY, "tok").unwrap();
    assert!(store.is_authenticated().unwrap());
}

#[test]
fn test_undecodable_user_reads_as_absent() {
    let (storage, store) = memory_store();
    storage.set(USER_KEY, "{broken").unwrap();
    assert_eq!(store.user().unwrap(), None);
}

#[test]
fn test_file_backed_session_survives_reopen() {
    let temp = tempfile::TempDir::new().unwrap();
    AuthStore::new(Arc::new(FileStorage::new(temp.path())))
        .save_auth("tok", &user())
        .unwrap();

    let reopened = AuthStore::new(Arc::new(FileStorage::new(temp.path())));
    assert!(reopened.is_authenticated().unwrap());
    assert_eq!(reopened.user().unwrap(), Some(user()));
}
