// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed endpoints of the verification API.
//!
//! Every request carries the stored bearer token when one exists. Any 401
//! response, whichever endpoint produced it, clears the stored session and
//! fires the unauthorized hook before surfacing [`Error::Unauthorized`].

use std::path::Path;

use ag_core::detection::validate_upload;
use ag_core::{
    Case, CaseDetails, CaseFilter, ChartPoint, DashboardStats, DetectionResult, ErrorEnvelope,
    Feedback, FeedbackFilter, HealthStatus, LoginRequest, LoginResponse, MediaType, NewFeedback,
};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::http::{ApiRequest, ApiResponse, HttpBackend, ReqwestBackend, RequestBody, UploadPart};
use crate::auth::AuthStore;
use crate::config::Config;
use crate::error::{Error, Result};

type UnauthorizedHook = Box<dyn Fn() + Send + Sync>;

/// Client for the verification REST API.
pub struct ApiClient<B: HttpBackend = ReqwestBackend> {
    backend: B,
    base: Url,
    health: Url,
    auth: AuthStore,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient<ReqwestBackend> {
    /// Creates a client for the configured API using `reqwest`.
    pub fn from_config(config: &Config, auth: AuthStore) -> Result<Self> {
        let backend = ReqwestBackend::new(config.timeout())?;
        Ok(Self::with_backend(
            backend,
            config.api_base()?,
            config.health_url()?,
            auth,
        ))
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Creates a client with a custom backend (for testing).
    pub fn with_backend(backend: B, base: Url, health: Url, auth: AuthStore) -> Self {
        ApiClient {
            backend,
            base,
            health,
            auth,
            on_unauthorized: None,
        }
    }

    /// Registers the callback fired after a 401 has cleared the session.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Box::new(hook));
        self
    }

    /// The session store this client reads its token from.
    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// Signs in and persists the returned session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let request = ApiRequest::post(self.endpoint(&["auth", "login"])?, RequestBody::Json(body));
        let response: LoginResponse = self.send_json(request).await?;
        self.auth.save_auth(&response.token, &response.user)?;
        tracing::info!(user = %response.user.email, "logged in");
        Ok(response)
    }

    /// Lists cases matching `filter`, in server order.
    pub async fn list_cases(&self, filter: &CaseFilter) -> Result<Vec<Case>> {
        let request = ApiRequest::get(self.endpoint(&["cases"])?).with_query(filter.query_pairs());
        let cases: Vec<Case> = self.send_json(request).await?;
        let fetched = cases.len();
        let cases = filter.apply(cases);
        if cases.len() != fetched {
            tracing::debug!(fetched, kept = cases.len(), "server ignored part of the case filter");
        }
        Ok(cases)
    }

    pub async fn get_case(&self, id: &str) -> Result<CaseDetails> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::FieldRequired { field: "Case ID" });
        }
        self.send_json(ApiRequest::get(self.endpoint(&["cases", id])?))
            .await
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        self.send_json(ApiRequest::get(self.endpoint(&["stats"])?))
            .await
    }

    /// The 7-day chart series, oldest first.
    pub async fn chart(&self) -> Result<Vec<ChartPoint>> {
        self.send_json(ApiRequest::get(self.endpoint(&["stats", "chart"])?))
            .await
    }

    /// Lists feedback matching `filter`, in server order.
    pub async fn list_feedback(&self, filter: &FeedbackFilter) -> Result<Vec<Feedback>> {
        let request =
            ApiRequest::get(self.endpoint(&["feedback"])?).with_query(filter.query_pairs());
        let feedback: Vec<Feedback> = self.send_json(request).await?;
        Ok(filter.apply(feedback))
    }

    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<Feedback> {
        let body = serde_json::to_value(feedback)?;
        self.send_json(ApiRequest::post(
            self.endpoint(&["feedback"])?,
            RequestBody::Json(body),
        ))
        .await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.send_json(ApiRequest::get(self.health.as_str())).await
    }

    pub async fn detect_image(&self, path: &Path) -> Result<DetectionResult> {
        self.detect(MediaType::Image, &[path]).await
    }

    pub async fn detect_video(&self, path: &Path) -> Result<DetectionResult> {
        self.detect(MediaType::Video, &[path]).await
    }

    /// Compares two audio recordings.
    pub async fn detect_audio(&self, first: &Path, second: &Path) -> Result<DetectionResult> {
        self.detect(MediaType::Audio, &[first, second]).await
    }

    async fn detect(&self, media_type: MediaType, paths: &[&Path]) -> Result<DetectionResult> {
        let mut parts = Vec::with_capacity(paths.len());
        for path in paths {
            validate_upload(media_type, path)?;
            let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::FileNotFound(path.display().to_string()),
                _ => Error::Io(e),
            })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            parts.push(UploadPart {
                field: media_type.upload_field(),
                file_name,
                bytes,
            });
        }

        tracing::info!(%media_type, files = parts.len(), "submitting media for detection");
        let url = self.endpoint(&["detect", media_type.as_str()])?;
        self.send_json(ApiRequest::post(url, RequestBody::Multipart(parts)))
            .await
    }

    /// URL of an endpoint below the API base.
    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("api_url cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(|e| Error::Decode(e.to_string()))
    }

    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        request.bearer = self.auth.token()?;
        let response = self.backend.execute(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        Err(self.status_error(response))
    }

    fn status_error(&self, response: ApiResponse) -> Error {
        let status = response.status;
        let message = ErrorEnvelope::parse(&response.body)
            .and_then(|envelope| envelope.message())
            .unwrap_or_else(|| fallback_message(status, &response.body));

        tracing::debug!(status, %message, "request failed");
        match status {
            401 => {
                self.handle_unauthorized();
                Error::Unauthorized
            }
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            400..=499 => Error::Validation { status, message },
            500..=599 => Error::Server { status, message },
            _ => Error::Decode(format!("unexpected status {}: {}", status, message)),
        }
    }

    fn handle_unauthorized(&self) {
        if let Err(e) = self.auth.logout() {
            tracing::warn!(error = %e, "failed to clear session after 401");
        }
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

/// Message for a failure response without a recognizable error envelope.
fn fallback_message(status: u16, body: &str) -> String {
    const MAX_LEN: usize = 200;
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {}", status);
    }
    match body.char_indices().nth(MAX_LEN) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
