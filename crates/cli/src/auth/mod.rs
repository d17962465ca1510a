// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted login session.
//!
//! The session is two string entries in a key-value [`Storage`]:
//! `authToken` (the bearer token) and `user` (the JSON-encoded user record).
//! [`AuthStore`] is the typed view over them.

mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{AuthStore, TOKEN_KEY, USER_KEY};
