// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn agv() -> Command {
    cargo_bin_cmd!("agv")
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
    powershell = { "powershell" },
    elvish = { "elvish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = agv().args(["completion", shell]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completion output should not be empty");
}

#[test]
fn bash_completion_names_subcommands() {
    let output = agv().args(["completion", "bash"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("_agv"));
    for sub in ["cases", "queue", "detect", "feedback"] {
        assert!(stdout.contains(sub), "bash completion should mention {sub}");
    }
}

#[test]
fn zsh_completion_has_compdef() {
    let output = agv().args(["completion", "zsh"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#compdef agv"));
}

#[test]
fn completion_without_shell_fails() {
    agv().arg("completion").assert().failure();
}

#[test]
fn completion_invalid_shell_fails() {
    agv().args(["completion", "tcsh"]).assert().failure();
}
