// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use ag_core::User;

use super::Storage;
use crate::error::Result;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key of the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Typed access to the persisted session.
///
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct AuthStore {
    storage: Arc<dyn Storage>,
}

impl AuthStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        AuthStore { storage }
    }

    /// Persists the token and user record of a successful login.
    pub fn save_auth(&self, token: &str, user: &User) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &serde_json::to_string(user)?)?;
        Ok(())
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.storage.get(TOKEN_KEY)
    }

    /// Returns the stored user. A record that no longer decodes reads as absent.
    pub fn user(&self) -> Result<Option<User>> {
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring undecodable stored user");
                Ok(None)
            }
        }
    }

    /// Removes both session keys.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }

    /// True iff a token is stored.
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.token()?.is_some())
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
