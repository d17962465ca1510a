// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::{config_dir, config_path, Config};
use crate::error::Result;

use super::print_json;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { output } => {
            let config = Config::load()?;
            match output {
                OutputFormat::Json => print_json(&config)?,
                OutputFormat::Text => {
                    for line in show_lines(&config) {
                        println!("{}", line);
                    }
                }
            }
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigCommand::Set { key, value } => {
            let config = set_in(&config_dir()?, &key, &value)?;
            println!("Set {} = {}", key, value_of(&config, &key));
            Ok(())
        }
    }
}

/// Effective settings, one `key = value` line per config key.
pub(crate) fn show_lines(config: &Config) -> Vec<String> {
    crate::config::CONFIG_KEYS
        .iter()
        .map(|key| format!("{} = {}", key, value_of(config, key)))
        .collect()
}

fn value_of(config: &Config, key: &str) -> String {
    match key {
        "api_url" => config.api_url.clone(),
        "timeout_secs" => config.timeout_secs.to_string(),
        "queue.url" => config.queue.url.clone(),
        "queue.reconnect_delay_ms" => config.queue.reconnect_delay_ms.to_string(),
        "queue.max_reconnect_attempts" => config.queue.max_reconnect_attempts.to_string(),
        _ => String::new(),
    }
}

/// Updates one key in `dir/config.toml`.
///
/// Only the file is read and written; environment overrides never end up
/// persisted.
pub(crate) fn set_in(dir: &Path, key: &str, value: &str) -> Result<Config> {
    let mut config = Config::load_from(dir)?;
    config.set(key, value)?;
    config.save_to(dir)?;
    tracing::debug!(key, dir = %dir.display(), "config updated");
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
