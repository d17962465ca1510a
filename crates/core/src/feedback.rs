// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User feedback on verification results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Whether the user agreed with the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Positive,
    Negative,
}

impl Rating {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Positive => "positive",
            Rating::Negative => "negative",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Rating::Positive),
            "negative" => Ok(Rating::Negative),
            _ => Err(Error::InvalidRating(s.to_string())),
        }
    }
}

/// A stored feedback record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub case_id: String,
    pub rating: Rating,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(with = "crate::timestamp")]
    pub submitted_at: DateTime<Utc>,
}

/// Body of a feedback submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub case_id: String,
    pub rating: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewFeedback {
    /// Creates a submission, dropping a blank comment.
    pub fn new(case_id: impl Into<String>, rating: Rating, comment: Option<String>) -> Self {
        NewFeedback {
            case_id: case_id.into(),
            rating,
            comment: comment.filter(|c| !c.trim().is_empty()),
        }
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
