// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ag_core::filter::parse_choice;
use ag_core::{Feedback, FeedbackFilter, NewFeedback, Rating};

use crate::api::{ApiClient, HttpBackend};
use crate::cli::{DateArgs, OutputFormat};
use crate::display::format_feedback_table;
use crate::error::{Error, Result};

use super::{open_client, print_json, require_login};

pub(crate) fn build_filter(rating: Option<&str>, dates: &DateArgs) -> Result<FeedbackFilter> {
    Ok(FeedbackFilter {
        rating: rating.map(parse_choice::<Rating>).transpose()?.flatten(),
        dates: dates.range()?,
    })
}

pub async fn list(rating: Option<String>, dates: DateArgs, output: OutputFormat) -> Result<()> {
    let filter = build_filter(rating.as_deref(), &dates)?;
    let client = open_client()?;
    list_impl(&client, &filter, output).await
}

pub(crate) async fn list_impl<B: HttpBackend>(
    client: &ApiClient<B>,
    filter: &FeedbackFilter,
    output: OutputFormat,
) -> Result<()> {
    require_login(client)?;
    let feedback = client.list_feedback(filter).await?;
    match output {
        OutputFormat::Json => print_json(&feedback),
        OutputFormat::Text => {
            for line in list_lines(&feedback, filter) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// The feedback table. An empty result under a filter says so.
pub(crate) fn list_lines(feedback: &[Feedback], filter: &FeedbackFilter) -> Vec<String> {
    if feedback.is_empty() && !filter.is_empty() {
        return vec!["No feedback matches the given filters.".to_string()];
    }
    format_feedback_table(feedback)
}

/// Validates the submission locally. `all` is not a rating here.
pub(crate) fn build_submission(
    case_id: &str,
    rating: &str,
    comment: Option<String>,
) -> Result<NewFeedback> {
    let case_id = case_id.trim();
    if case_id.is_empty() {
        return Err(Error::FieldRequired { field: "Case ID" });
    }
    let rating: Rating = rating.trim().parse()?;
    let comment = comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    Ok(NewFeedback::new(case_id, rating, comment))
}

pub async fn submit(
    case_id: &str,
    rating: &str,
    comment: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let submission = build_submission(case_id, rating, comment)?;
    let client = open_client()?;
    submit_impl(&client, &submission, output).await
}

pub(crate) async fn submit_impl<B: HttpBackend>(
    client: &ApiClient<B>,
    submission: &NewFeedback,
    output: OutputFormat,
) -> Result<()> {
    require_login(client)?;
    let created = client.submit_feedback(submission).await?;
    match output {
        OutputFormat::Json => print_json(&created),
        OutputFormat::Text => {
            println!(
                "Recorded {} feedback {} for case {}",
                created.rating, created.id, created.case_id
            );
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
