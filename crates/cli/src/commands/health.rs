// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::api::{ApiClient, HttpBackend};
use crate::cli::OutputFormat;
use crate::display::format_health;
use crate::error::Result;

use super::{open_client, print_json};

/// Probes the backend. No session is needed.
pub async fn run(output: OutputFormat) -> Result<()> {
    let client = open_client()?;
    run_impl(&client, output).await
}

pub(crate) async fn run_impl<B: HttpBackend>(client: &ApiClient<B>, output: OutputFormat) -> Result<()> {
    let health = client.health().await?;
    if !health.is_healthy() {
        tracing::warn!(status = %health.status, "backend reports degraded health");
    }
    match output {
        OutputFormat::Json => print_json(&health),
        OutputFormat::Text => {
            println!("{}", format_health(&health));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
