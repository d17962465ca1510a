// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST client for the verification API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  ApiClient  │────►│ HttpBackend │────►│   REST API  │
//! │             │◄────│   (trait)   │◄────│             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  AuthStore  │  (bearer token, cleared on 401)
//! └─────────────┘
//! ```

mod client;
mod http;

pub use client::ApiClient;
pub use http::{
    ApiRequest, ApiResponse, HttpBackend, HttpError, HttpResult, Method, ReqwestBackend,
    RequestBody, UploadPart,
};

#[cfg(test)]
pub(crate) mod mock;
