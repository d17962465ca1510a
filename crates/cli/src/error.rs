// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::config::CONFIG_KEYS;

/// All possible errors that can occur in the agrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not logged in\n  hint: run 'agv login' first")]
    NotLoggedIn,

    #[error("session expired or rejected\n  hint: run 'agv login' to sign in again")]
    Unauthorized,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}\n  hint: check that the API is reachable (agv status shows the configured URL)")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("queue error: {0}")]
    Queue(#[from] crate::queue::QueueError),

    #[error("queue connection lost after {attempts} reconnect attempts")]
    QueueGaveUp { attempts: u32 },

    #[error("unknown config key '{0}'\n  hint: valid keys are: {keys}", keys = CONFIG_KEYS.join(", "))]
    UnknownConfigKey(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidConfigValue { key: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Core(#[from] ag_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for agrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<crate::api::HttpError> for Error {
    fn from(e: crate::api::HttpError) -> Self {
        Error::Network(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
