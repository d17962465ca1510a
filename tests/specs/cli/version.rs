// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version flag specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use similar_asserts::assert_eq;
use yare::parameterized;

#[parameterized(
    long_version = { "--version" },
    short_v = { "-v" },
    silent_v = { "-V" },
)]
fn version_flag_outputs_version(flag: &str) {
    agv()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("agv "));
}

#[test]
fn short_and_long_flags_agree() {
    let long = agv().arg("--version").output().unwrap();
    let short = agv().arg("-v").output().unwrap();
    assert_eq!(
        String::from_utf8_lossy(&long.stdout),
        String::from_utf8_lossy(&short.stdout)
    );
}

#[test]
fn version_subcommand_does_not_exist() {
    agv().arg("version").assert().failure();
}
