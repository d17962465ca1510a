// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use clap::CommandFactory;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_verbose_is_global() {
    let cli = parse(&["agv", "stats", "--verbose"]).unwrap();
    assert!(cli.verbose);
    let cli = parse(&["agv", "--verbose", "health"]).unwrap();
    assert!(cli.verbose);
    let cli = parse(&["agv", "health"]).unwrap();
    assert!(!cli.verbose);
}

#[parameterized(
    short = { "-v" },
    short_alias = { "-V" },
    long = { "--version" },
)]
fn test_version_flags(flag: &str) {
    let err = parse(&["agv", flag]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[parameterized(
    text = { "text", OutputFormat::Text },
    json = { "json", OutputFormat::Json },
)]
fn test_output_format(value: &str, expected: OutputFormat) {
    let cli = parse(&["agv", "stats", "-o", value]).unwrap();
    match cli.command {
        Command::Stats { output } => assert_eq!(output, expected),
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn test_output_format_rejects_unknown() {
    assert!(parse(&["agv", "stats", "-o", "yaml"]).is_err());
}

#[test]
fn test_missing_subcommand_fails() {
    assert!(parse(&["agv"]).is_err());
}
