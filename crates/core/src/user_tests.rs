// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;

#[test]
fn login_response_deserializes() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "token": "eyJhbGciOiJIUzI1NiJ9.e30.sig",
        "user": {"id": "u-1", "email": "admin@afriguard.com", "name": "Admin User"}
    }))
    .unwrap();
    assert_eq!(resp.user.email, "admin@afriguard.com");
    assert!(resp.token.starts_with("eyJ"));
}

#[test]
fn login_request_debug_hides_password() {
    let req = LoginRequest {
        email: "admin@afriguard.com".into(),
        password: "admin123".into(),
    };
    let debug = format!("{:?}", req);
    assert!(debug.contains("admin@afriguard.com"));
    assert!(!debug.contains("admin123"));
}
