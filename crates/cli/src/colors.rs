// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help text and verdict highlighting.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Likely manipulated: muted red
    pub const ALERT: u8 = 167;
    /// Likely authentic: sage green
    pub const OK: u8 = 108;

    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const ALERT_START: &str = "\x1b[38;5;167m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color a verdict by whether the case reads as manipulated.
pub fn verdict(text: &str, manipulated: bool) -> String {
    paint(if manipulated { codes::ALERT } else { codes::OK }, text)
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   agv cases list --media-type video    Only video cases
///   agv cases show <id>                  One case in detail
/// ```
///
/// Header lines (ending with `:`) get the header color; the command part of
/// an example line is literal, with `<placeholders>` in context color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    text.lines()
        .map(colorize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if trimmed.ends_with(':') && !trimmed.contains("  ") {
        return format!("{indent}{}", header(trimmed));
    }
    match find_description_start(trimmed) {
        Some(cmd_end) => format!(
            "{indent}{}{}",
            colorize_command(&trimmed[..cmd_end]),
            &trimmed[cmd_end..]
        ),
        None => line.to_string(),
    }
}

/// Colorize a command string, dimming `<placeholders>`.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.starts_with('<') && word.ends_with('>') {
                context(word)
            } else if word.is_empty() {
                String::new()
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    line.find("  ").filter(|&i| !line[i..].trim().is_empty())
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
