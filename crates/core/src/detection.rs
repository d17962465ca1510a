// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Media submission and service health payloads.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::case::MediaType;
use crate::error::{Error, Result};

impl MediaType {
    /// File extensions the detection endpoint for this media type accepts.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            MediaType::Image => &["png", "jpg", "jpeg", "bmp", "webp"],
            MediaType::Video => &["mp4", "mov", "avi", "mkv", "webm"],
            MediaType::Audio => &["wav", "mp3", "m4a", "ogg", "flac"],
        }
    }

    /// Multipart field name the detection endpoint reads files from.
    pub fn upload_field(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio_files",
        }
    }

    /// Number of files one submission carries.
    pub fn upload_count(&self) -> usize {
        match self {
            MediaType::Audio => 2,
            MediaType::Image | MediaType::Video => 1,
        }
    }
}

/// Checks that `path` has an extension the endpoint for `media_type` accepts.
pub fn validate_upload(media_type: MediaType, path: &Path) -> Result<()> {
    let accepted = media_type.accepted_extensions();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext {
        Some(ext) if accepted.contains(&ext.as_str()) => Ok(()),
        _ => Err(Error::UnsupportedMedia {
            file: path.display().to_string(),
            kind: media_type.to_string(),
            expected: accepted.join(", "),
        }),
    }
}

/// Result of a detection request.
///
/// The common fields are typed; endpoint-specific fields (frame details,
/// similarity scores, durations) are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub case_id: String,
    pub verdict: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, rename = "is_fake", skip_serializing_if = "Option::is_none")]
    pub is_fake: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, alias = "modelsLoaded")]
    pub models_loaded: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    /// Returns true if the service reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
#[path = "detection_tests.rs"]
mod tests;
