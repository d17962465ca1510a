// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        header("Options:")
    )
}

fn header(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn literal(text: &str) -> String {
    if colors::should_colorize() {
        colors::literal(text)
    } else {
        text.to_string()
    }
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_dashboard}
  {cases}       List and inspect verification cases
  {stats}       Dashboard counters and the 7-day chart
  {feedback}    List or submit analyst feedback
  {queue}       Watch the live processing queue
  {detect}      Submit media for verification
  {health}      Check the backend

{header_setup}
  {login}       Sign in and store the session
  {logout}      Clear the stored session
  {status}      Show session and endpoints
  {config}      Manage configuration
  {completion}  Generate shell completions
",
        header_dashboard = header("Dashboard:"),
        header_setup = header("Session & Setup:"),
        cases = literal("cases"),
        stats = literal("stats"),
        feedback = literal("feedback"),
        queue = literal("queue"),
        detect = literal("detect"),
        health = literal("health"),
        login = literal("login"),
        logout = literal("logout"),
        status = literal("status"),
        config = literal("config"),
        completion = literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  agv login --email <email>    Sign in (password from AGV_PASSWORD or stdin)
  agv cases list               Recent verification cases
  agv queue watch              Follow the processing queue
  agv logout                   Forget the session",
    )
}
