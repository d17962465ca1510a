// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::DateArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "agv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Terminal client for the AfriGuard Verify deepfake-verification service")]
#[command(
    long_about = "Terminal client for the AfriGuard Verify deepfake-verification service.\n\n\
    Browse verification cases and statistics, follow the live processing queue,\n\
    review analyst feedback and submit media for verification."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Sign in and store the session
    #[command(after_help = colors::examples("\
Examples:
  agv login --email analyst@example.org                Read the password from stdin
  AGV_PASSWORD=... agv login -e analyst@example.org    Password from the environment"))]
    Login {
        /// Account email
        #[arg(long, short)]
        email: String,

        /// Password (prefer AGV_PASSWORD or stdin; flags end up in shell history)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the session and configured endpoints
    Status {
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────────────────────
    /// List and inspect verification cases
    #[command(subcommand)]
    Cases(CasesCommand),

    /// Dashboard counters and the 7-day chart
    Stats {
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List or submit analyst feedback
    #[command(subcommand)]
    Feedback(FeedbackCommand),

    /// Watch the live processing queue
    #[command(subcommand)]
    Queue(QueueCommand),

    /// Submit media for verification
    #[command(subcommand)]
    Detect(DetectCommand),

    /// Check the backend
    Health {
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CasesCommand {
    /// List cases, newest first as served
    #[command(after_help = colors::examples("\
Examples:
  agv cases list                                 All cases
  agv cases list --media-type video              Only video cases
  agv cases list --status completed -o json      Completed cases as JSON
  agv cases list --since 2024-05-01              Cases submitted since May 1st"))]
    List {
        /// image, video, audio or all
        #[arg(long, short = 'm', value_name = "TYPE")]
        media_type: Option<String>,

        /// analyzing, completed, failed or all
        #[arg(long, short)]
        status: Option<String>,

        #[command(flatten)]
        dates: DateArgs,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show one case in detail
    Show {
        /// Case ID
        id: String,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum FeedbackCommand {
    /// List feedback
    #[command(after_help = colors::examples("\
Examples:
  agv feedback list                      All feedback
  agv feedback list --rating negative    Only disputed verdicts"))]
    List {
        /// positive, negative or all
        #[arg(long, short)]
        rating: Option<String>,

        #[command(flatten)]
        dates: DateArgs,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Rate a case verdict
    #[command(after_help = colors::examples("\
Examples:
  agv feedback submit <case-id> --rating positive
  agv feedback submit <case-id> -r negative -c \"voice is synthetic\""))]
    Submit {
        /// Case ID
        case_id: String,

        /// positive or negative
        #[arg(long, short)]
        rating: String,

        /// Optional comment
        #[arg(long, short)]
        comment: Option<String>,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum QueueCommand {
    /// Follow queue snapshots until interrupted
    #[command(after_help = colors::examples("\
Examples:
  agv queue watch              Redraw on every change, Ctrl-C to stop
  agv queue watch --once       Print the current snapshot and exit
  agv queue watch -o json      One JSON array per line"))]
    Watch {
        /// Exit after the first snapshot
        #[arg(long)]
        once: bool,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum DetectCommand {
    /// Check an image (png, jpg, jpeg, bmp, webp)
    Image {
        file: PathBuf,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Check a video (mp4, mov, avi, mkv, webm)
    Video {
        file: PathBuf,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Compare two recordings (wav, mp3, m4a, ogg, flac)
    Audio {
        first: PathBuf,
        second: PathBuf,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show {
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the path of config.toml
    Path,

    /// Set a key in config.toml
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  agv config set api_url https://verify.example/api
  agv config set queue.url wss://verify.example/ws/queue
  agv config set queue.max_reconnect_attempts 10")
    )]
    Set {
        /// api_url, timeout_secs, queue.url, queue.reconnect_delay_ms, queue.max_reconnect_attempts
        key: String,

        value: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
