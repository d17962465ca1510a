// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ag-core operations.

use thiserror::Error;

/// All possible errors that can occur in ag-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid media type: '{0}'\n  hint: valid media types are: image, video, audio")]
    InvalidMediaType(String),

    #[error(
        "invalid case status: '{0}'\n  hint: valid statuses are: analyzing, completed, failed"
    )]
    InvalidCaseStatus(String),

    #[error("invalid queue status: '{0}'\n  hint: valid statuses are: preprocessing, analyzing, llm_explaining, sending_result")]
    InvalidQueueStatus(String),

    #[error("invalid rating: '{0}'\n  hint: valid ratings are: positive, negative")]
    InvalidRating(String),

    #[error("invalid date: '{0}'\n  hint: dates use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("unsupported {kind} file: {file}\n  hint: supported formats are: {expected}")]
    UnsupportedMedia {
        file: String,
        kind: String,
        expected: String,
    },

    #[error("malformed queue frame: {0}")]
    MalformedFrame(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ag-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
