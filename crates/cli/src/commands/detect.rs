// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Media submission commands.
//!
//! Files are checked locally (extension, existence) before the session is
//! consulted, so a bad path fails the same way logged in or not.

use std::path::PathBuf;

use ag_core::detection::validate_upload;
use ag_core::MediaType;

use crate::api::{ApiClient, HttpBackend};
use crate::cli::{DetectCommand, OutputFormat};
use crate::display::format_detection;
use crate::error::{Error, Result};

use super::{open_client, print_json, require_login, use_color};

pub async fn run(cmd: DetectCommand) -> Result<()> {
    let (media_type, files, output) = match cmd {
        DetectCommand::Image { file, output } => (MediaType::Image, vec![file], output),
        DetectCommand::Video { file, output } => (MediaType::Video, vec![file], output),
        DetectCommand::Audio {
            first,
            second,
            output,
        } => (MediaType::Audio, vec![first, second], output),
    };
    check_files(media_type, &files)?;
    let client = open_client()?;
    run_impl(&client, media_type, &files, output).await
}

pub(crate) fn check_files(media_type: MediaType, files: &[PathBuf]) -> Result<()> {
    check_count(media_type, files)?;
    for file in files {
        validate_upload(media_type, file)?;
        if !file.is_file() {
            return Err(Error::FileNotFound(file.display().to_string()));
        }
    }
    Ok(())
}

pub(crate) async fn run_impl<B: HttpBackend>(
    client: &ApiClient<B>,
    media_type: MediaType,
    files: &[PathBuf],
    output: OutputFormat,
) -> Result<()> {
    require_login(client)?;
    check_count(media_type, files)?;
    tracing::debug!(%media_type, count = files.len(), "submitting media");
    let result = match (media_type, files) {
        (MediaType::Image, [file]) => client.detect_image(file).await?,
        (MediaType::Video, [file]) => client.detect_video(file).await?,
        (MediaType::Audio, [first, second]) => client.detect_audio(first, second).await?,
        _ => {
            return Err(Error::FieldRequired {
                field: upload_requirement(media_type),
            })
        }
    };
    match output {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            println!("{}", format_detection(&result, use_color()));
            Ok(())
        }
    }
}

fn check_count(media_type: MediaType, files: &[PathBuf]) -> Result<()> {
    if files.len() == media_type.upload_count() {
        return Ok(());
    }
    Err(Error::FieldRequired {
        field: upload_requirement(media_type),
    })
}

fn upload_requirement(media_type: MediaType) -> &'static str {
    match media_type.upload_count() {
        1 => "One file",
        _ => "Two audio files",
    }
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
