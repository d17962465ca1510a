// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard aggregates computed by the server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline counters for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_verifications_today: u64,
    /// Share of completed cases judged manipulated, 0-100.
    pub deepfake_percentage: f64,
    pub average_confidence: f64,
    pub total_cases: u64,
}

/// One day of the verification chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub verifications: u64,
    pub deepfakes: u64,
}

impl ChartPoint {
    /// Share of the day's verifications judged manipulated, 0-100.
    pub fn deepfake_rate(&self) -> f64 {
        if self.verifications == 0 {
            0.0
        } else {
            self.deepfakes as f64 * 100.0 / self.verifications as f64
        }
    }
}

/// Totals over a chart series as (verifications, deepfakes).
pub fn chart_totals(points: &[ChartPoint]) -> (u64, u64) {
    points.iter().fold((0, 0), |(v, d), p| {
        (v + p.verifications, d + p.deepfakes)
    })
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
