// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in `config.toml` inside the config directory
//! and includes:
//! - `api_url`: Base URL of the verification API (e.g., "http://localhost:8000/api")
//! - `timeout_secs`: Per-request timeout for REST calls
//! - `[queue]`: WebSocket URL and reconnect policy for the live queue
//!
//! A missing file means defaults. `AGV_API_URL` and `AGV_QUEUE_URL` win
//! over the file.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};
use crate::queue::QueueSettings;

const APP_DIR_NAME: &str = "afriguard";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Keys accepted by `agv config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "api_url",
    "timeout_secs",
    "queue.url",
    "queue.reconnect_delay_ms",
    "queue.max_reconnect_attempts",
];

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Live queue WebSocket configuration.
    #[serde(default)]
    pub queue: QueueConfig,
}

/// Live queue WebSocket configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// WebSocket URL of the queue feed.
    #[serde(default = "default_queue_url")]
    pub url: String,
    /// Fixed delay between reconnect attempts in milliseconds (default: 3000).
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    /// Maximum reconnect attempts before giving up (default: 5).
    #[serde(default = "default_max_reconnect_attempts")]
    pub max_reconnect_attempts: u32,
}

fn default_api_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_queue_url() -> String {
    "ws://localhost:8000/ws/queue".to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    3000
}

fn default_max_reconnect_attempts() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            queue: QueueConfig::default(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            url: default_queue_url(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
            max_reconnect_attempts: default_max_reconnect_attempts(),
        }
    }
}

impl Config {
    /// Loads configuration from the resolved config directory and applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&config_dir()?)?;
        Ok(config.with_overrides(env::api_url(), env::queue_url()))
    }

    /// Loads configuration from `dir/config.toml`. A missing file yields defaults.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to `dir/config.toml`, creating the directory.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    /// Replaces the URLs with any values given, leaving the rest untouched.
    pub fn with_overrides(mut self, api_url: Option<String>, queue_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(url) = queue_url {
            self.queue.url = url;
        }
        self
    }

    /// Sets a single key, validating the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownConfigKey`] for keys outside [`CONFIG_KEYS`] and
    /// [`Error::InvalidConfigValue`] when the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "api_url" => {
                parse_url(key, value, &["http", "https"])?;
                self.api_url = value.trim_end_matches('/').to_string();
            }
            "timeout_secs" => {
                let secs = parse_number::<u64>(key, value)?;
                if secs == 0 {
                    return Err(invalid(key, "must be at least 1"));
                }
                self.timeout_secs = secs;
            }
            "queue.url" => {
                parse_url(key, value, &["ws", "wss"])?;
                self.queue.url = value.to_string();
            }
            "queue.reconnect_delay_ms" => {
                self.queue.reconnect_delay_ms = parse_number(key, value)?;
            }
            "queue.max_reconnect_attempts" => {
                self.queue.max_reconnect_attempts = parse_number(key, value)?;
            }
            _ => return Err(Error::UnknownConfigKey(key.to_string())),
        }
        Ok(())
    }

    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API base URL, parsed.
    pub fn api_base(&self) -> Result<Url> {
        parse_url("api_url", &self.api_url, &["http", "https"])
    }

    /// URL of the health probe, which lives at the root of the API origin.
    pub fn health_url(&self) -> Result<Url> {
        self.api_base()?
            .join("/health")
            .map_err(|e| invalid("api_url", &e.to_string()))
    }

    /// Reconnect policy and URL for the queue client.
    pub fn queue_settings(&self) -> QueueSettings {
        QueueSettings {
            url: self.queue.url.clone(),
            reconnect_delay: Duration::from_millis(self.queue.reconnect_delay_ms),
            max_reconnect_attempts: self.queue.max_reconnect_attempts,
        }
    }
}

fn invalid(key: &str, reason: &str) -> Error {
    Error::InvalidConfigValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_url(key: &str, value: &str, schemes: &[&str]) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| invalid(key, &e.to_string()))?;
    if !schemes.contains(&url.scheme()) {
        let expected = schemes
            .iter()
            .map(|s| format!("{}://", s))
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(invalid(key, &format!("expected a {} URL", expected)));
    }
    Ok(url)
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| invalid(key, &format!("'{}' is not a non-negative integer", value)))
}

/// Resolves a directory from an explicit override, an XDG base, or the
/// home directory, in that order.
fn resolve_dir(
    explicit: Option<PathBuf>,
    xdg_base: Option<PathBuf>,
    home_relative: &str,
) -> Option<PathBuf> {
    explicit
        .or_else(|| xdg_base.map(|base| base.join(APP_DIR_NAME)))
        .or_else(|| dirs::home_dir().map(|home| home.join(home_relative).join(APP_DIR_NAME)))
}

/// Directory holding `config.toml`.
pub fn config_dir() -> Result<PathBuf> {
    resolve_dir(env::config_dir(), env::xdg_config_home(), ".config")
        .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))
}

/// Path of `config.toml`.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Directory holding the persisted session.
pub fn state_dir() -> Result<PathBuf> {
    resolve_dir(env::state_dir(), env::xdg_state_home(), ".local/state")
        .ok_or_else(|| Error::Config("cannot determine state directory".to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
