// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session specs: login, logout, status and commands that need a session.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn status_without_session() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"))
        .stdout(predicate::str::contains(DEAD_API));
}

#[test]
fn status_with_stored_session() {
    let sandbox = Sandbox::new();
    sandbox.store_session();
    sandbox
        .agv()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Logged in as Spec Analyst <analyst@example.org>",
        ));
}

#[test]
fn status_json_reports_authentication() {
    let sandbox = Sandbox::new();
    let output = sandbox.agv().args(["status", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["authenticated"], false);
    assert_eq!(status["api_url"], DEAD_API);
}

#[test]
fn logout_clears_stored_session() {
    let sandbox = Sandbox::new();
    sandbox.store_session();
    sandbox
        .agv()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));
    sandbox
        .agv()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn logout_without_session_succeeds() {
    let sandbox = Sandbox::new();
    sandbox.agv().arg("logout").assert().success();
}

#[parameterized(
    cases_list = { &["cases", "list"] },
    cases_show = { &["cases", "show", "c-1"] },
    stats = { &["stats"] },
    feedback_list = { &["feedback", "list"] },
    feedback_submit = { &["feedback", "submit", "c-1", "--rating", "positive"] },
)]
fn commands_need_a_session(args: &[&str]) {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: not logged in"))
        .stderr(predicate::str::contains("agv login"));
}

#[test]
fn login_against_unreachable_api_is_network_error() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["login", "--email", "analyst@example.org"])
        .env("AGV_PASSWORD", "secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("network error"));
    assert!(!sandbox.state_dir().join("session.json").exists());
}

#[test]
fn login_without_password_input_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["login", "--email", "analyst@example.org"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password is required"));
}

#[test]
fn invalid_filter_is_rejected_before_session_check() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["cases", "list", "--since", "2024-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in").not());
}
