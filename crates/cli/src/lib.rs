// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! agrs - terminal client library for the AfriGuard Verify service.
//!
//! This crate provides the core functionality for the `agv` CLI tool: a
//! typed REST client, a persisted session, and the live queue client.
//!
//! # Main Components
//!
//! - [`api::ApiClient`] - REST endpoints for cases, stats, feedback, detection and health
//! - [`auth::AuthStore`] - Session persisted in the state directory
//! - [`queue::QueueClient`] - WebSocket queue feed with bounded fixed-delay reconnect
//! - [`Config`] - `config.toml` plus environment overrides
//! - [`Error`] - Error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use agrs::{api::ApiClient, auth::AuthStore, commands, Config};
//!
//! let config = Config::load()?;
//! let client = ApiClient::from_config(&config, commands::open_auth()?)?;
//! let cases = client.list_cases(&Default::default()).await?;
//! ```

pub mod api;
pub mod auth;
mod cli;
pub mod colors;
pub mod commands;
mod display;
pub mod env;
pub mod help;
pub mod queue;

pub mod config;
pub mod error;

pub use cli::{
    CasesCommand, Cli, Command, ConfigCommand, DateArgs, DetectCommand, FeedbackCommand,
    OutputFormat, QueueCommand,
};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(cli.command))
}

async fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Login { email, password } => commands::auth::login(&email, password).await,
        Command::Logout => commands::auth::logout(),
        Command::Status { output } => commands::auth::status(output),
        Command::Cases(cmd) => match cmd {
            CasesCommand::List {
                media_type,
                status,
                dates,
                output,
            } => commands::cases::list(media_type, status, dates, output).await,
            CasesCommand::Show { id, output } => commands::cases::show(&id, output).await,
        },
        Command::Stats { output } => commands::stats::run(output).await,
        Command::Feedback(cmd) => match cmd {
            FeedbackCommand::List {
                rating,
                dates,
                output,
            } => commands::feedback::list(rating, dates, output).await,
            FeedbackCommand::Submit {
                case_id,
                rating,
                comment,
                output,
            } => commands::feedback::submit(&case_id, &rating, comment, output).await,
        },
        Command::Queue(QueueCommand::Watch { once, output }) => {
            commands::queue::watch(once, output).await
        }
        Command::Detect(cmd) => commands::detect::run(cmd).await,
        Command::Health { output } => commands::health::run(output).await,
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "agv", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
