// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP abstraction for REST communication.
//!
//! Provides a trait-based HTTP layer that enables:
//! - Real requests through `reqwest` for production
//! - Scripted backends for unit testing

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use ag_core::filter::QueryPairs;

/// Error type for HTTP operations that never produced a response.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Could not reach the server.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One file of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub field: &'static str,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<UploadPart>),
}

/// A fully resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: QueryPairs,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        ApiRequest {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn post(url: impl Into<String>, body: RequestBody) -> Self {
        ApiRequest {
            method: Method::Post,
            body,
            ..Self::get(url)
        }
    }

    pub fn with_query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }
}

/// Status code and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests.
///
/// Abstracts over the actual HTTP stack so the API client can be tested
/// against scripted responses.
pub trait HttpBackend: Send + Sync {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = HttpResult<ApiResponse>> + Send + '_>>;
}

/// HTTP backend using `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Creates a backend whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("agv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::Request(e.to_string()))?;
        Ok(ReqwestBackend { client })
    }
}

fn classify(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_connect() {
        HttpError::Connect(e.to_string())
    } else {
        HttpError::Request(e.to_string())
    }
}

impl HttpBackend for ReqwestBackend {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = HttpResult<ApiResponse>> + Send + '_>> {
        Box::pin(async move {
            use reqwest::multipart::{Form, Part};

            let mut builder = match request.method {
                Method::Get => self.client.get(&request.url),
                Method::Post => self.client.post(&request.url),
            };
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token);
            }
            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(parts) => {
                    let form = parts.into_iter().fold(Form::new(), |form, part| {
                        form.part(part.field, Part::bytes(part.bytes).file_name(part.file_name))
                    });
                    builder.multipart(form)
                }
            };

            tracing::debug!(method = ?request.method, url = %request.url, "sending request");
            let response = builder.send().await.map_err(classify)?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::Body(e.to_string()))?;
            tracing::debug!(status, bytes = body.len(), "received response");

            Ok(ApiResponse { status, body })
        })
    }
}
