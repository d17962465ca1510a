// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp parsing for API payloads.
//!
//! The verification backend emits ISO-8601 timestamps either with an offset
//! (`2024-05-01T10:20:30Z`) or naive (`2024-05-01T10:20:30.123456`). Naive
//! values are UTC. Everything is written back as RFC 3339.
//!
//! Use with `#[serde(with = "crate::timestamp")]`, or
//! `#[serde(default, with = "crate::timestamp::option")]` for optional fields.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{Error, Result};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an API timestamp, accepting offset-qualified and naive forms.
pub fn parse(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| Error::InvalidTimestamp(s.to_string()))
}

/// Formats a timestamp the way it is written to JSON output.
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Same as the parent module, for `Option<DateTime<Utc>>` fields.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_some(&format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => {
                parse(&raw).map(Some).map_err(serde::de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
