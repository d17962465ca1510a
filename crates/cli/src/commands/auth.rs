// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session commands: login, logout and status.

use std::io::BufRead;

use serde::Serialize;

use crate::api::{ApiClient, HttpBackend};
use crate::auth::AuthStore;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_user;
use crate::env;
use crate::error::{Error, Result};

use super::{open_auth, open_client, print_json};

pub async fn login(email: &str, password: Option<String>) -> Result<()> {
    let password = resolve_password(password, env::password(), std::io::stdin().lock())?;
    let client = open_client()?;
    login_impl(&client, email, &password).await
}

pub(crate) async fn login_impl<B: HttpBackend>(
    client: &ApiClient<B>,
    email: &str,
    password: &str,
) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::FieldRequired { field: "Email" });
    }
    let response = client.login(email, password).await?;
    println!("Logged in as {}", format_user(&response.user));
    Ok(())
}

/// Picks the password from the flag, then the environment, then one line of
/// `input`.
pub(crate) fn resolve_password(
    flag: Option<String>,
    from_env: Option<String>,
    mut input: impl BufRead,
) -> Result<String> {
    if let Some(password) = flag.or(from_env) {
        return Ok(password);
    }
    let mut line = String::new();
    input.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(Error::FieldRequired { field: "Password" });
    }
    Ok(password.to_string())
}

pub fn logout() -> Result<()> {
    logout_impl(&open_auth()?)
}

pub(crate) fn logout_impl(store: &AuthStore) -> Result<()> {
    let was_logged_in = store.is_authenticated()?;
    store.logout()?;
    if was_logged_in {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

#[derive(Serialize)]
struct SessionStatus {
    authenticated: bool,
    user: Option<ag_core::User>,
    api_url: String,
    queue_url: String,
}

pub fn status(output: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    for line in status_impl(&config, &open_auth()?, output)? {
        println!("{}", line);
    }
    Ok(())
}

pub(crate) fn status_impl(
    config: &Config,
    store: &AuthStore,
    output: OutputFormat,
) -> Result<Vec<String>> {
    let status = SessionStatus {
        authenticated: store.is_authenticated()?,
        user: store.user()?,
        api_url: config.api_url.clone(),
        queue_url: config.queue.url.clone(),
    };

    match output {
        OutputFormat::Json => {
            print_json(&status)?;
            Ok(Vec::new())
        }
        OutputFormat::Text => {
            let session = match (&status.user, status.authenticated) {
                (Some(user), true) => format!("Logged in as {}", format_user(user)),
                (None, true) => "Logged in".to_string(),
                _ => "Not logged in".to_string(),
            };
            Ok(vec![
                session,
                format!("API:   {}", status.api_url),
                format!("Queue: {}", status.queue_url),
            ])
        }
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
