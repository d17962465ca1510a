// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of API records.
//!
//! Every function takes a `color` flag; with `false` the output contains no
//! escape sequences.

use ag_core::stats::chart_totals;
use ag_core::{
    Case, CaseDetails, ChartPoint, DashboardStats, DetectionResult, Feedback, HealthStatus,
    QueueItem, User,
};
use chrono::{DateTime, Utc};

use crate::colors;

/// Maximum line width for wrapped text content (excluding indent).
const WRAP_WIDTH: usize = 96;

/// Width of the queue progress bar and the chart bars.
const BAR_WIDTH: usize = 20;

fn when(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn verdict(text: &str, manipulated: bool, color: bool) -> String {
    if color {
        colors::verdict(text, manipulated)
    } else {
        text.to_string()
    }
}

/// Wrap a single line at word boundaries. Multi-line content is kept as-is.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for word in content.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines.join("\n")
}

/// One row of the case table.
pub fn format_case_line(case: &Case, color: bool) -> String {
    format!(
        "{:<12} {:<5} {:<9} {:>5.1}%  {}  {}",
        case.id,
        case.media_type.as_str(),
        case.status.as_str(),
        case.confidence,
        when(&case.submitted_at),
        verdict(&case.verdict_label(), case.is_deepfake(), color),
    )
}

/// The case table, or a placeholder line when empty.
pub fn format_case_table(cases: &[Case], color: bool) -> Vec<String> {
    if cases.is_empty() {
        return vec!["No cases found.".to_string()];
    }
    let mut lines = vec![format!(
        "{:<12} {:<5} {:<9} {:>6}  {:<16}  VERDICT",
        "ID", "TYPE", "STATUS", "CONF", "SUBMITTED"
    )];
    lines.extend(cases.iter().map(|c| format_case_line(c, color)));
    lines
}

/// Case details for `agv cases show`.
pub fn format_case_details(details: &CaseDetails, color: bool) -> String {
    let case = &details.case;
    let mut output = vec![
        format!("[{}] {}", case.media_type, case.id),
        format!(
            "Verdict: {}",
            verdict(&case.verdict_label(), case.is_deepfake(), color)
        ),
        if case.status.is_terminal() {
            format!("Status: {}", case.status)
        } else {
            format!("Status: {} (results pending)", case.status)
        },
        format!("Confidence: {:.1}%", case.confidence),
        format!("Submitted: {}", when(&case.submitted_at)),
    ];
    if let Some(completed) = &case.completed_at {
        output.push(format!("Completed: {}", when(completed)));
    }
    if let Some(ms) = details.processing_time_ms {
        output.push(format!("Processing time: {:.1}s", ms as f64 / 1000.0));
    }
    if let Some(worker) = &details.worker_id {
        output.push(format!("Worker: {}", worker));
    }

    let scores = case.scores();
    if !scores.is_empty() {
        output.push(String::new());
        output.push("Scores:".to_string());
        for (name, score) in scores {
            output.push(format!("  {:<8} {:>5.1}", name, score));
        }
    }

    if let Some(explanation) = details.explanation.as_deref().filter(|e| !e.trim().is_empty()) {
        output.push(String::new());
        output.push("Explanation:".to_string());
        for line in wrap_text(explanation.trim(), WRAP_WIDTH).lines() {
            output.push(format!("  {}", line));
        }
    }

    let urls = [("Media", &details.media_url), ("Heatmap", &details.heatmap_url)];
    if urls.iter().any(|(_, u)| u.is_some()) {
        output.push(String::new());
        for (label, url) in urls {
            if let Some(url) = url {
                output.push(format!("{}: {}", label, url));
            }
        }
    }

    output.join("\n")
}

fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}

/// Dashboard counters followed by the chart series.
pub fn format_stats(stats: &DashboardStats, chart: &[ChartPoint]) -> String {
    let mut output = vec![
        format!("Verifications today: {}", stats.total_verifications_today),
        format!("Deepfake rate:       {:.1}%", stats.deepfake_percentage),
        format!("Average confidence:  {:.1}%", stats.average_confidence),
        format!("Total cases:         {}", stats.total_cases),
    ];

    if !chart.is_empty() {
        let peak = chart.iter().map(|p| p.verifications).max().unwrap_or(0).max(1);
        output.push(String::new());
        output.push("Last 7 days:".to_string());
        for point in chart {
            output.push(format!(
                "  {}  {}  {:>4} verified, {:>4} deepfakes ({:.1}%)",
                point.date,
                bar(point.verifications as f64 / peak as f64, BAR_WIDTH),
                point.verifications,
                point.deepfakes,
                point.deepfake_rate(),
            ));
        }
        let (verifications, deepfakes) = chart_totals(chart);
        output.push(format!(
            "  total       {:>width$}  {:>4} verified, {:>4} deepfakes",
            "",
            verifications,
            deepfakes,
            width = BAR_WIDTH
        ));
    }

    output.join("\n")
}

/// One row of the feedback table.
pub fn format_feedback_line(feedback: &Feedback) -> String {
    let mut line = format!(
        "{:<12} {:<12} {:<8}  {}",
        feedback.id,
        feedback.case_id,
        feedback.rating.as_str(),
        when(&feedback.submitted_at)
    );
    if let Some(comment) = feedback.comment.as_deref().filter(|c| !c.is_empty()) {
        line.push_str(&format!("  \"{}\"", comment));
    }
    line
}

pub fn format_feedback_table(feedback: &[Feedback]) -> Vec<String> {
    if feedback.is_empty() {
        return vec!["No feedback found.".to_string()];
    }
    let mut lines = vec![format!(
        "{:<12} {:<12} {:<8}  SUBMITTED",
        "ID", "CASE", "RATING"
    )];
    lines.extend(feedback.iter().map(format_feedback_line));
    lines
}

/// One row of the live queue.
pub fn format_queue_line(item: &QueueItem) -> String {
    let mut line = format!(
        "{:<12} {:<5} [{}] {:>3.0}%  {}",
        item.id,
        item.media_type.as_str(),
        bar(item.progress / 100.0, BAR_WIDTH),
        item.progress,
        item.status.label(),
    );
    if let Some(worker) = &item.worker_id {
        line.push_str(&format!("  ({})", worker));
    }
    line
}

pub fn format_queue(items: &[QueueItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["Queue is empty.".to_string()];
    }
    let noun = if items.len() == 1 { "item" } else { "items" };
    let mut lines = vec![format!("{} {} in progress", items.len(), noun)];
    lines.extend(items.iter().map(format_queue_line));
    lines
}

pub fn format_detection(result: &DetectionResult, color: bool) -> String {
    let manipulated = result
        .is_fake
        .unwrap_or_else(|| ag_core::verdict::is_manipulated(result.confidence));
    let mut output = vec![
        format!("Case: {}", result.case_id),
        format!("Verdict: {}", verdict(&result.verdict, manipulated, color)),
        format!("Confidence: {:.1}%", result.confidence),
    ];
    if let Some(explanation) = result.explanation.as_deref().filter(|e| !e.trim().is_empty()) {
        output.push(String::new());
        output.extend(wrap_text(explanation.trim(), WRAP_WIDTH).lines().map(String::from));
    }
    output.join("\n")
}

pub fn format_health(health: &HealthStatus) -> String {
    let mut output = vec![
        format!("Status: {}", health.status),
        format!(
            "Models: {}",
            if health.models_loaded { "loaded" } else { "not loaded" }
        ),
    ];
    if let Some(ts) = &health.timestamp {
        output.push(format!("Checked: {}", ts));
    }
    output.join("\n")
}

pub fn format_user(user: &User) -> String {
    format!("{} <{}>", user.name, user.email)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
