// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ag_core::{ChartPoint, DashboardStats};
use serde::Serialize;

use crate::api::{ApiClient, HttpBackend};
use crate::cli::OutputFormat;
use crate::display::format_stats;
use crate::error::Result;

use super::{open_client, print_json, require_login};

#[derive(Serialize)]
struct StatsReport {
    stats: DashboardStats,
    chart: Vec<ChartPoint>,
}

pub async fn run(output: OutputFormat) -> Result<()> {
    let client = open_client()?;
    run_impl(&client, output).await
}

pub(crate) async fn run_impl<B: HttpBackend>(client: &ApiClient<B>, output: OutputFormat) -> Result<()> {
    require_login(client)?;
    let stats = client.stats().await?;
    let chart = client.chart().await?;
    match output {
        OutputFormat::Json => print_json(&StatsReport { stats, chart }),
        OutputFormat::Text => {
            println!("{}", format_stats(&stats, &chart));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
