// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Media submission specs. Every case here fails before any upload.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[parameterized(
    image_as_gif = { "image", "face.gif" },
    video_as_png = { "video", "clip.png" },
    no_extension = { "image", "face" },
)]
fn unsupported_extension_is_rejected(kind: &str, name: &str) {
    let sandbox = Sandbox::new();
    sandbox.store_session();
    let file = sandbox.file(name);
    sandbox
        .agv()
        .args(["detect", kind])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported"))
        .stderr(predicate::str::contains("network").not());
}

#[test]
fn missing_file_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.store_session();
    let missing = sandbox.path().join("absent.mp4");
    sandbox
        .agv()
        .args(["detect", "video"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn file_checks_run_before_session_check() {
    let sandbox = Sandbox::new();
    let file = sandbox.file("voice.txt");
    let other = sandbox.file("voice.wav");
    sandbox
        .agv()
        .args(["detect", "audio"])
        .arg(&file)
        .arg(&other)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in").not());
}

#[test]
fn audio_requires_two_files() {
    let sandbox = Sandbox::new();
    let file = sandbox.file("voice.wav");
    sandbox
        .agv()
        .args(["detect", "audio"])
        .arg(&file)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn valid_upload_needs_a_session() {
    let sandbox = Sandbox::new();
    let file = sandbox.file("face.png");
    sandbox
        .agv()
        .args(["detect", "image"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}
