// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List filters for cases and feedback.
//!
//! A filter has two uses: it renders into the query string sent to the
//! list endpoint, and it can be applied to a decoded list. Applying keeps
//! the server's order and only removes items that do not match.
//!
//! The value `all` means "no filter" for every enumerated field.

use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use crate::case::{Case, CaseStatus, MediaType};
use crate::error::{Error, Result};
use crate::feedback::{Feedback, Rating};

/// Date format used in query strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameters in the order they are sent.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Parses an enumerated filter value, mapping `all` to no filter.
pub fn parse_choice<T>(s: &str) -> Result<Option<T>>
where
    T: FromStr<Err = Error>,
{
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Inclusive range of calendar days (UTC).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range, rejecting a start after the end.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(Error::InvalidDateRange {
                    start: s.format(DATE_FORMAT).to_string(),
                    end: e.format(DATE_FORMAT).to_string(),
                });
            }
        }
        Ok(DateRange { start, end })
    }

    /// Returns true if neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns true if the timestamp falls on a day inside the range.
    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        let day = at.date_naive();
        self.start.map_or(true, |s| day >= s) && self.end.map_or(true, |e| day <= e)
    }

    fn push_query(&self, pairs: &mut QueryPairs) {
        if let Some(start) = self.start {
            pairs.push(("startDate", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("endDate", end.format(DATE_FORMAT).to_string()));
        }
    }
}

/// Filter for `GET /cases`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub media_type: Option<MediaType>,
    pub status: Option<CaseStatus>,
    pub dates: DateRange,
}

impl CaseFilter {
    /// Returns true if the filter matches every case.
    pub fn is_empty(&self) -> bool {
        self.media_type.is_none() && self.status.is_none() && self.dates.is_unbounded()
    }

    /// Query parameters for the list request.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        if let Some(media_type) = self.media_type {
            pairs.push(("mediaType", media_type.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        self.dates.push_query(&mut pairs);
        pairs
    }

    /// Returns true if the case satisfies every set criterion.
    pub fn matches(&self, case: &Case) -> bool {
        self.media_type.map_or(true, |m| case.media_type == m)
            && self.status.map_or(true, |s| case.status == s)
            && self.dates.contains(&case.submitted_at)
    }

    /// Keeps the matching cases in their original order.
    pub fn apply(&self, mut cases: Vec<Case>) -> Vec<Case> {
        cases.retain(|c| self.matches(c));
        cases
    }
}

/// Filter for `GET /feedback`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub rating: Option<Rating>,
    pub dates: DateRange,
}

impl FeedbackFilter {
    /// Returns true if the filter matches every record.
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.dates.is_unbounded()
    }

    /// Query parameters for the list request.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        if let Some(rating) = self.rating {
            pairs.push(("rating", rating.to_string()));
        }
        self.dates.push_query(&mut pairs);
        pairs
    }

    /// Returns true if the record satisfies every set criterion.
    pub fn matches(&self, feedback: &Feedback) -> bool {
        self.rating.map_or(true, |r| feedback.rating == r) && self.dates.contains(&feedback.submitted_at)
    }

    /// Keeps the matching records in their original order.
    pub fn apply(&self, mut feedback: Vec<Feedback>) -> Vec<Feedback> {
        feedback.retain(|f| self.matches(f));
        feedback
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
