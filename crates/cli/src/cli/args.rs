// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common filter patterns.

use ag_core::filter::parse_date;
use ag_core::DateRange;
use clap::Args;

/// Inclusive date bounds on `submittedAt`.
#[derive(Args, Clone, Debug, Default)]
pub struct DateArgs {
    /// Only items submitted on or after this day
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub since: Option<String>,

    /// Only items submitted on or before this day
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub until: Option<String>,
}

impl DateArgs {
    /// Parses the bounds; blank values mean unbounded.
    pub fn range(&self) -> ag_core::Result<DateRange> {
        let parse = |value: &Option<String>| -> ag_core::Result<_> {
            match value.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(day) => parse_date(day).map(Some),
            }
        };
        DateRange::new(parse(&self.since)?, parse(&self.until)?)
    }
}
