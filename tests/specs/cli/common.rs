// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// API address nothing listens on, so a request that slips through fails fast.
pub const DEAD_API: &str = "http://127.0.0.1:9/api";

/// `agv` with no isolation; use for commands that touch no files.
pub fn agv() -> Command {
    cargo_bin_cmd!("agv")
}

/// Throwaway config and state directories.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `agv` pointed at this sandbox.
    pub fn agv(&self) -> Command {
        let mut cmd = agv();
        cmd.env("AGV_CONFIG_DIR", self.config_dir())
            .env("AGV_STATE_DIR", self.state_dir())
            .env("AGV_API_URL", DEAD_API)
            .env("NO_COLOR", "1")
            .env_remove("AGV_QUEUE_URL")
            .env_remove("AGV_PASSWORD")
            .env_remove("COLOR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Writes a session file as `agv login` would.
    pub fn store_session(&self) {
        std::fs::create_dir_all(self.state_dir()).unwrap();
        let user = serde_json::json!({
            "id": "u-1",
            "email": "analyst@example.org",
            "name": "Spec Analyst",
        });
        let session = serde_json::json!({
            "authToken": "tok-spec",
            "user": user.to_string(),
        });
        std::fs::write(self.state_dir().join("session.json"), session.to_string()).unwrap();
    }

    /// Creates a file with `name` in the sandbox.
    pub fn file(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, b"media").unwrap();
        path
    }
}
