// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod auth;
pub mod cases;
pub mod config;
pub mod detect;
pub mod feedback;
pub mod health;
pub mod queue;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiClient, HttpBackend};
use crate::auth::{AuthStore, FileStorage};
use crate::config::{state_dir, Config};
use crate::error::{Error, Result};

/// Opens the session store in the state directory.
pub fn open_auth() -> Result<AuthStore> {
    Ok(AuthStore::new(Arc::new(FileStorage::new(state_dir()?))))
}

/// Builds an API client from the effective configuration and stored session.
pub fn open_client() -> Result<ApiClient> {
    let config = Config::load()?;
    let client = ApiClient::from_config(&config, open_auth()?)?.on_unauthorized(|| {
        tracing::warn!("server rejected the session, stored credentials cleared");
    });
    Ok(client)
}

/// Fails fast when no token is stored.
pub fn require_login<B: HttpBackend>(client: &ApiClient<B>) -> Result<()> {
    if client.auth().is_authenticated()? {
        Ok(())
    } else {
        Err(Error::NotLoggedIn)
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Whether stdout output should carry color codes.
pub fn use_color() -> bool {
    crate::colors::should_colorize()
}
