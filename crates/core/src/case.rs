// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verification cases.
//!
//! A case is one deepfake-verification request and its result. Cases are
//! owned by the server; the client only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::verdict;

/// Kind of media submitted for verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

impl MediaType {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            _ => Err(Error::InvalidMediaType(s.to_string())),
        }
    }
}

/// Processing status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Submitted and still in the processing queue.
    Analyzing,
    /// Finished with a verdict.
    Completed,
    /// Processing failed; the verdict carries no score.
    Failed,
}

impl CaseStatus {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Analyzing => "analyzing",
            CaseStatus::Completed => "completed",
            CaseStatus::Failed => "failed",
        }
    }

    /// Returns true once the case will no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CaseStatus::Completed | CaseStatus::Failed)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "analyzing" => Ok(CaseStatus::Analyzing),
            "completed" => Ok(CaseStatus::Completed),
            "failed" => Ok(CaseStatus::Failed),
            _ => Err(Error::InvalidCaseStatus(s.to_string())),
        }
    }
}

/// A case as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub media_type: MediaType,
    pub status: CaseStatus,
    /// Manipulation confidence, 0-100.
    pub confidence: f64,
    #[serde(with = "crate::timestamp")]
    pub submitted_at: DateTime<Utc>,
    #[serde(default, with = "crate::timestamp::option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verdict: String,
    #[serde(default)]
    pub face_score: Option<f64>,
    #[serde(default)]
    pub voice_score: Option<f64>,
    #[serde(default)]
    pub lipsync_score: Option<f64>,
}

impl Case {
    /// Returns true if the case completed with a manipulation verdict.
    pub fn is_deepfake(&self) -> bool {
        self.status == CaseStatus::Completed && verdict::is_manipulated(self.confidence)
    }

    /// Returns the verdict to show for this case.
    ///
    /// The server's verdict wins when present. Otherwise the label is
    /// derived from the status and confidence score.
    pub fn verdict_label(&self) -> String {
        if !self.verdict.trim().is_empty() {
            return self.verdict.clone();
        }
        match self.status {
            CaseStatus::Analyzing => verdict::PROCESSING.to_string(),
            CaseStatus::Failed => verdict::FAILED.to_string(),
            CaseStatus::Completed => verdict::label(self.confidence),
        }
    }

    /// Per-modality scores that are present, in display order.
    pub fn scores(&self) -> Vec<(&'static str, f64)> {
        [
            ("face", self.face_score),
            ("voice", self.voice_score),
            ("lipsync", self.lipsync_score),
        ]
        .into_iter()
        .filter_map(|(name, score)| score.map(|s| (name, s)))
        .collect()
    }
}

/// A case with the detail fields served by `GET /cases/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    #[serde(flatten)]
    pub case: Case,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heatmap_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
