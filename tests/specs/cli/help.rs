// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn help_lists_command_groups() {
    agv()
        .arg("--help")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Dashboard:"))
        .stdout(predicate::str::contains("Session & Setup:"));
}

#[test]
fn without_arguments_shows_usage_and_fails() {
    agv()
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    login = { "login" },
    logout = { "logout" },
    status = { "status" },
    cases = { "cases" },
    stats = { "stats" },
    feedback = { "feedback" },
    queue = { "queue" },
    detect = { "detect" },
    health = { "health" },
    config = { "config" },
    completion = { "completion" },
)]
fn every_command_has_help(command: &str) {
    agv()
        .args([command, "--help"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn cases_list_help_shows_filters() {
    agv()
        .args(["cases", "list", "--help"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("--media-type"))
        .stdout(predicate::str::contains("--since"))
        .stdout(predicate::str::contains("--until"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn no_color_disables_escape_codes() {
    let output = agv().arg("--help").env("NO_COLOR", "1").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\x1b["), "help should be plain with NO_COLOR");
}

#[test]
fn unknown_command_fails() {
    agv()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
