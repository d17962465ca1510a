// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted HTTP backend shared by the client and command tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use super::http::{ApiRequest, ApiResponse, HttpBackend, HttpError, HttpResult};

/// Backend that replays scripted responses and records requests.
///
/// Unscripted requests fail with a connect error.
#[derive(Clone, Default)]
pub(crate) struct MockBackend {
    responses: Arc<Mutex<VecDeque<HttpResult<ApiResponse>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockBackend {
    pub(crate) fn respond(&self, status: u16, body: serde_json::Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub(crate) fn respond_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub(crate) fn fail(&self, err: HttpError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request sent")
    }
}

impl HttpBackend for MockBackend {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = HttpResult<ApiResponse>> + Send + '_>> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Connect("no scripted response".into())));
        Box::pin(async move { next })
    }
}
