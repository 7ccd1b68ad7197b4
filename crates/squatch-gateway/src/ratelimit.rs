// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-window per-client rate limiting.
//!
//! One window per client key, held in a concurrent map owned by the limiter.
//! The limiter lives from process start to process stop and is injected into
//! the request path as shared state rather than reached through a global.

use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde_json::json;
use tracing::debug;

/// Verdict for one request against the limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    /// Over the limit; retry after this many whole seconds.
    Limited { retry_after_secs: u64 },
}

struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client address.
pub struct FixedWindowLimiter {
    windows: DashMap<String, Window>,
    max_requests: u32,
    window: Duration,
    enabled: bool,
}

impl FixedWindowLimiter {
    pub fn new(enabled: bool, max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
            enabled,
        }
    }

    /// Count one request for `key` and decide whether it may proceed.
    ///
    /// An elapsed window resets to a fresh one; the counting request is the
    /// first of the new window.
    pub fn check(&self, key: &str) -> Decision {
        if !self.enabled {
            return Decision::Allowed;
        }

        let now = Instant::now();
        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.started);
            let remaining = self.window.saturating_sub(elapsed);
            return Decision::Limited {
                retry_after_secs: remaining.as_secs().max(1),
            };
        }

        entry.count += 1;
        Decision::Allowed
    }
}

/// Client key for a request: first `X-Forwarded-For` hop, else the peer
/// address recorded at accept time, else a shared fallback bucket.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware applying the limiter to each request.
pub async fn rate_limit_middleware(
    State(limiter): State<std::sync::Arc<FixedWindowLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);
    match limiter.check(&key) {
        Decision::Allowed => next.run(request).await,
        Decision::Limited { retry_after_secs } => {
            debug!(client = %key, retry_after_secs, "rate limit exceeded");
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "error": "too many requests",
                    "retryAfter": retry_after_secs,
                })),
            )
                .into_response()
        }
    }
}
