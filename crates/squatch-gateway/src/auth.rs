// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static API-key middleware for the gateway.
//!
//! Validation happens against the `x-api-key` header. When no key is
//! configured the middleware is a no-op: every request passes. This matches
//! the deployment model where the service runs behind a trusted proxy and
//! the key is an opt-in extra.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API-key configuration for inbound requests.
#[derive(Clone)]
pub struct ApiKeyConfig {
    /// Expected key. `None` disables the check entirely.
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

/// Middleware that validates the `x-api-key` header when a key is configured.
pub async fn api_key_middleware(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Response {
    let Some(ref expected) = config.api_key else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid or missing API key"})),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_the_key() {
        let config = ApiKeyConfig {
            api_key: Some("hunter2".to_string()),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn unset_key_is_representable() {
        let config = ApiKeyConfig { api_key: None };
        assert!(config.api_key.is_none());
    }
}
