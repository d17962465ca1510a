// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use similar_asserts::assert_eq;

#[test]
fn path_points_into_config_dir() {
    let sandbox = Sandbox::new();
    let output = sandbox.agv().args(["config", "path"]).output().unwrap();
    assert!(output.status.success());
    let expected = format!("{}\n", sandbox.config_dir().join("config.toml").display());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn show_defaults_with_env_override() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("api_url = {}", DEAD_API)))
        .stdout(predicate::str::contains("queue.url = ws://localhost:8000/ws/queue"))
        .stdout(predicate::str::contains("queue.reconnect_delay_ms = 3000"))
        .stdout(predicate::str::contains("queue.max_reconnect_attempts = 5"));
}

#[test]
fn set_persists_value() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["config", "set", "queue.max_reconnect_attempts", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set queue.max_reconnect_attempts = 8"));

    let output = sandbox
        .agv()
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["queue"]["max_reconnect_attempts"], 8);
}

#[test]
fn env_override_is_not_persisted() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["config", "set", "timeout_secs", "5"])
        .assert()
        .success();
    let content = std::fs::read_to_string(sandbox.config_dir().join("config.toml")).unwrap();
    assert!(content.contains("timeout_secs = 5"));
    assert!(!content.contains(DEAD_API));
}

#[test]
fn set_unknown_key_fails_with_hint() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["config", "set", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key 'colour'"))
        .stderr(predicate::str::contains("queue.url"));
}

#[test]
fn set_rejects_http_queue_url() {
    let sandbox = Sandbox::new();
    sandbox
        .agv()
        .args(["config", "set", "queue.url", "http://localhost:8000/ws/queue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for queue.url"));
}

#[test]
fn corrupt_config_file_is_reported() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.config_dir()).unwrap();
    std::fs::write(sandbox.config_dir().join("config.toml"), "api_url = [").unwrap();
    sandbox
        .agv()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
