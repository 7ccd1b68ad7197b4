// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the GoHighLevel MCP tool-call endpoint.
//!
//! One JSON-RPC POST per tool call, authenticated per-request with the
//! caller's bearer token and location scope. Calls are never retried here:
//! retry policy belongs to callers.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tracing::debug;

use squatch_core::{Credentials, GhlTool, SquatchError};

use crate::types::{parse_response_body, unwrap_tool_result, JsonRpcRequest};

/// Client for the remote tool-call service.
///
/// Request ids come from a process-lifetime counter, which keeps them unique
/// under concurrent calls (timestamps would not be).
#[derive(Debug)]
pub struct GhlClient {
    client: reqwest::Client,
    mcp_url: String,
    next_id: AtomicU64,
}

impl GhlClient {
    /// Creates a client for the given MCP endpoint URL.
    pub fn new(mcp_url: impl Into<String>) -> Result<Self, SquatchError> {
        let mut headers = HeaderMap::new();
        // The remote answers either plain JSON or an event-stream body.
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/event-stream"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SquatchError::Gateway {
                status: None,
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            mcp_url: mcp_url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// The endpoint this client talks to.
    pub fn mcp_url(&self) -> &str {
        &self.mcp_url
    }

    /// Next JSON-RPC request id. Strictly increasing within the process.
    pub fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Invoke a remote tool and return its payload.
    ///
    /// Any non-2xx status or network failure becomes a gateway error carrying
    /// the remote status (when one was received) and message. No automatic
    /// retries, no partial results.
    pub async fn call(
        &self,
        tool: GhlTool,
        arguments: Value,
        credentials: &Credentials,
    ) -> Result<Value, SquatchError> {
        let request = JsonRpcRequest::tool_call(self.next_request_id(), tool, arguments);
        debug!(tool = %tool, id = request.id, "calling GHL tool");

        let response = self
            .client
            .post(&self.mcp_url)
            .bearer_auth(&credentials.token)
            .header("locationId", &credentials.location_id)
            .json(&request)
            .send()
            .await
            .map_err(|e| SquatchError::Gateway {
                status: e.status().map(|s| s.as_u16()),
                message: format!("GHL request failed: {e}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| SquatchError::Gateway {
            status: Some(status.as_u16()),
            message: format!("failed to read GHL response body: {e}"),
        })?;

        if !status.is_success() {
            let message = remote_error_message(&body)
                .unwrap_or_else(|| format!("GHL API returned {status}"));
            return Err(SquatchError::Gateway {
                status: Some(status.as_u16()),
                message,
            });
        }

        let value = parse_response_body(&body)?;
        unwrap_tool_result(value)
    }
}

/// Pull a human-readable message out of an error body, if there is one.
fn remote_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error").and_then(|e| e.get("message")))
        .and_then(|m| m.as_str())
        .map(|m| format!("GHL API error: {m}"))
}
