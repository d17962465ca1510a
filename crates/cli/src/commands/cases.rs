// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ag_core::filter::parse_choice;
use ag_core::{Case, CaseFilter, CaseStatus, MediaType};

use crate::api::{ApiClient, HttpBackend};
use crate::cli::{DateArgs, OutputFormat};
use crate::display::{format_case_details, format_case_table};
use crate::error::Result;

use super::{open_client, print_json, require_login, use_color};

/// Builds the case filter from command-line values. `all` means unfiltered.
pub(crate) fn build_filter(
    media_type: Option<&str>,
    status: Option<&str>,
    dates: &DateArgs,
) -> Result<CaseFilter> {
    Ok(CaseFilter {
        media_type: media_type.map(parse_choice::<MediaType>).transpose()?.flatten(),
        status: status.map(parse_choice::<CaseStatus>).transpose()?.flatten(),
        dates: dates.range()?,
    })
}

pub async fn list(
    media_type: Option<String>,
    status: Option<String>,
    dates: DateArgs,
    output: OutputFormat,
) -> Result<()> {
    let filter = build_filter(media_type.as_deref(), status.as_deref(), &dates)?;
    let client = open_client()?;
    list_impl(&client, &filter, output).await
}

pub(crate) async fn list_impl<B: HttpBackend>(
    client: &ApiClient<B>,
    filter: &CaseFilter,
    output: OutputFormat,
) -> Result<()> {
    require_login(client)?;
    let cases = client.list_cases(filter).await?;
    match output {
        OutputFormat::Json => print_json(&cases),
        OutputFormat::Text => {
            for line in list_lines(&cases, filter, use_color()) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// The case table. An empty result under a filter says so.
pub(crate) fn list_lines(cases: &[Case], filter: &CaseFilter, color: bool) -> Vec<String> {
    if cases.is_empty() && !filter.is_empty() {
        return vec!["No cases match the given filters.".to_string()];
    }
    format_case_table(cases, color)
}

pub async fn show(id: &str, output: OutputFormat) -> Result<()> {
    let client = open_client()?;
    show_impl(&client, id, output).await
}

pub(crate) async fn show_impl<B: HttpBackend>(
    client: &ApiClient<B>,
    id: &str,
    output: OutputFormat,
) -> Result<()> {
    require_login(client)?;
    let details = client.get_case(id).await?;
    match output {
        OutputFormat::Json => print_json(&details),
        OutputFormat::Text => {
            println!("{}", format_case_details(&details, use_color()));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "cases_tests.rs"]
mod tests;
