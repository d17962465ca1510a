// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by `agv` are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the value of `AGV_API_URL` if set and non-empty.
pub fn api_url() -> Option<String> {
    non_empty(vars::AGV_API_URL)
}

/// Returns the value of `AGV_QUEUE_URL` if set and non-empty.
pub fn queue_url() -> Option<String> {
    non_empty(vars::AGV_QUEUE_URL)
}

/// Returns the value of `AGV_PASSWORD` if set.
pub fn password() -> Option<String> {
    std::env::var(vars::AGV_PASSWORD).ok()
}

/// Returns the value of `AGV_CONFIG_DIR` if set.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var(vars::AGV_CONFIG_DIR).ok().map(PathBuf::from)
}

/// Returns the value of `AGV_STATE_DIR` if set.
pub fn state_dir() -> Option<PathBuf> {
    std::env::var(vars::AGV_STATE_DIR).ok().map(PathBuf::from)
}

/// Returns the value of `XDG_CONFIG_HOME` if set.
pub fn xdg_config_home() -> Option<PathBuf> {
    std::env::var(vars::XDG_CONFIG_HOME).ok().map(PathBuf::from)
}

/// Returns the value of `XDG_STATE_HOME` if set.
pub fn xdg_state_home() -> Option<PathBuf> {
    std::env::var(vars::XDG_STATE_HOME).ok().map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
