// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Tests for the public `run()` entry point.
//!
//! Commands that reach the API or the user's directories are covered by the
//! binary specs; here only routing that needs neither is exercised.

use clap::Parser;

use super::*;

#[test]
fn test_completion_runs_without_config() {
    let cli = Cli::try_parse_from(["agv", "completion", "bash"]).unwrap();
    run(cli).unwrap();
}

#[test]
fn test_invalid_filter_fails_before_network() {
    let cli = Cli::try_parse_from(["agv", "cases", "list", "--media-type", "podcast"]).unwrap();
    let err = run(cli).unwrap_err();
    assert!(matches!(err, Error::Core(ag_core::Error::InvalidMediaType(_))));
}
