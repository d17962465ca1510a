// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live processing-queue snapshots.
//!
//! The queue endpoint pushes the complete list of in-flight items on every
//! change. Items move through a fixed sequence of stages and disappear once
//! the result has been sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::case::MediaType;
use crate::error::{Error, Result};

/// Highest valid progress value.
pub const MAX_PROGRESS: f64 = 100.0;

/// Processing stage of a queue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Preprocessing,
    Analyzing,
    LlmExplaining,
    SendingResult,
}

impl QueueStatus {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Preprocessing => "preprocessing",
            QueueStatus::Analyzing => "analyzing",
            QueueStatus::LlmExplaining => "llm_explaining",
            QueueStatus::SendingResult => "sending_result",
        }
    }

    /// Returns a short label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            QueueStatus::Preprocessing => "Preprocessing",
            QueueStatus::Analyzing => "Analyzing",
            QueueStatus::LlmExplaining => "Generating explanation",
            QueueStatus::SendingResult => "Sending result",
        }
    }

    /// Progress reported when an item enters this stage.
    pub fn entry_progress(&self) -> u8 {
        match self {
            QueueStatus::Preprocessing => 0,
            QueueStatus::Analyzing => 30,
            QueueStatus::LlmExplaining => 70,
            QueueStatus::SendingResult => 90,
        }
    }

    /// The stage that follows this one, or `None` after the last stage.
    pub fn next(&self) -> Option<QueueStatus> {
        match self {
            QueueStatus::Preprocessing => Some(QueueStatus::Analyzing),
            QueueStatus::Analyzing => Some(QueueStatus::LlmExplaining),
            QueueStatus::LlmExplaining => Some(QueueStatus::SendingResult),
            QueueStatus::SendingResult => None,
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueueStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "preprocessing" => Ok(QueueStatus::Preprocessing),
            "analyzing" => Ok(QueueStatus::Analyzing),
            "llm_explaining" => Ok(QueueStatus::LlmExplaining),
            "sending_result" => Ok(QueueStatus::SendingResult),
            _ => Err(Error::InvalidQueueStatus(s.to_string())),
        }
    }
}

/// One case's live progress snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub id: String,
    pub media_type: MediaType,
    #[serde(with = "crate::timestamp")]
    pub submitted_at: DateTime<Utc>,
    /// Percent complete, 0-100. Fractional values are allowed.
    pub progress: f64,
    pub status: QueueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
}

impl QueueItem {
    /// Creates an item at the start of the pipeline.
    pub fn new(id: impl Into<String>, media_type: MediaType, submitted_at: DateTime<Utc>) -> Self {
        QueueItem {
            id: id.into(),
            media_type,
            submitted_at,
            progress: f64::from(QueueStatus::Preprocessing.entry_progress()),
            status: QueueStatus::Preprocessing,
            worker_id: None,
        }
    }

    /// Moves the item into the next stage.
    ///
    /// Returns false when the item has finished its last stage.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                self.progress = f64::from(next.entry_progress());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
