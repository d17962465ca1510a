// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict labels derived from confidence scores.

/// Confidence above which a completed case counts as manipulated.
pub const DEEPFAKE_THRESHOLD: f64 = 50.0;

/// Label for cases still in the queue.
pub const PROCESSING: &str = "Processing...";

/// Label for cases whose analysis failed.
pub const FAILED: &str = "Analysis Failed";

/// Returns true if the confidence score indicates manipulation.
pub fn is_manipulated(confidence: f64) -> bool {
    confidence > DEEPFAKE_THRESHOLD
}

/// Builds the human-readable verdict for a confidence score.
///
/// Scores above the threshold read as the likelihood of manipulation,
/// everything else as the likelihood of authenticity.
pub fn label(confidence: f64) -> String {
    let confidence = confidence.clamp(0.0, 100.0);
    if is_manipulated(confidence) {
        format!("{:.0}% Likely Manipulated", confidence)
    } else {
        format!("{:.0}% Likely Authentic", 100.0 - confidence)
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
