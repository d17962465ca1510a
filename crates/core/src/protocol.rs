// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire formats shared by the client and the queue simulator.
//!
//! The queue protocol is one-way: the server pushes a complete JSON array
//! of [`QueueItem`]s whenever the queue changes. There are no
//! client-to-server messages.
//!
//! REST errors arrive in a JSON envelope, parsed by [`ErrorEnvelope`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::queue::{QueueItem, MAX_PROGRESS};

/// Parses one queue frame into the full list of in-flight items.
///
/// A frame that is not an array of valid items, or that reports progress
/// outside 0-100, is rejected as a whole.
pub fn parse_queue_frame(text: &str) -> Result<Vec<QueueItem>> {
    let items: Vec<QueueItem> =
        serde_json::from_str(text).map_err(|e| Error::MalformedFrame(e.to_string()))?;

    if let Some(item) = items
        .iter()
        .find(|i| !(0.0..=MAX_PROGRESS).contains(&i.progress))
    {
        return Err(Error::MalformedFrame(format!(
            "item {} reports progress {}",
            item.id, item.progress
        )));
    }

    Ok(items)
}

/// Serializes a queue snapshot into one frame.
pub fn encode_queue_frame(items: &[QueueItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Error body returned by the REST API.
///
/// The documented shape is `{error, code?, details?}`. FastAPI-style
/// `{detail}` bodies, where `detail` is a string or a list of validation
/// errors, are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorEnvelope {
    /// Parses an error body; returns `None` if it is not a JSON object.
    pub fn parse(body: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }

    /// Returns the most specific human-readable message in the envelope.
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.is_empty()) {
            return Some(error.clone());
        }
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Array(entries)) => {
                let msgs: Vec<String> = entries
                    .iter()
                    .filter_map(validation_message)
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// Formats one FastAPI validation entry as `field: message`.
fn validation_message(entry: &Value) -> Option<String> {
    let msg = entry.get("msg")?.as_str()?;
    let field = entry
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(|last| match last {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
    Some(match field {
        Some(field) => format!("{}: {}", field, msg),
        None => msg.to_string(),
    })
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
