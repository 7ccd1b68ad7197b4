// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the chat assistant REST API.
//!
//! Handles POST /api/mcp/chat, POST /api/mcp/test-connection,
//! GET /api/mcp/test-ai, GET /api/health.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use squatch_core::{Credentials, GhlTool, SquatchError};

use crate::server::GatewayState;

/// Request body for POST /api/mcp/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User's free-text message.
    #[serde(default)]
    pub message: String,
    /// GoHighLevel private integration token.
    #[serde(rename = "ghlToken", default)]
    pub ghl_token: String,
    /// GoHighLevel location (sub-account) identifier.
    #[serde(rename = "locationId", default)]
    pub location_id: String,
}

/// Response body for POST /api/mcp/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Natural-language assistant reply.
    pub response: String,
    /// Raw tool result, inline `{"error": …}` object, or null.
    #[serde(rename = "ghlData")]
    pub ghl_data: Option<Value>,
    /// Action identifier, or the general-conversation sentinel.
    #[serde(rename = "actionTaken")]
    pub action_taken: String,
}

/// Request body for POST /api/mcp/test-connection.
#[derive(Debug, Deserialize)]
pub struct TestConnectionRequest {
    #[serde(rename = "ghlToken", default)]
    pub ghl_token: String,
    #[serde(rename = "locationId", default)]
    pub location_id: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(err: SquatchError) -> Response {
    let status = match err {
        SquatchError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// POST /api/mcp/chat
///
/// One request-response cycle: validation failures are 400, unexpected
/// internal failures 500; tool and summarization failures have already been
/// folded into the outcome by the orchestrator and stay 200.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Response {
    let credentials = Credentials::new(body.ghl_token, body.location_id);

    match state.orchestrator.handle(&body.message, &credentials).await {
        Ok(outcome) => {
            info!(action = %outcome.action_taken, "chat handled");
            (
                StatusCode::OK,
                Json(ChatResponse {
                    response: outcome.response,
                    ghl_data: outcome.ghl_data,
                    action_taken: outcome.action_taken,
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(error = %err, "chat request failed");
            error_response(err)
        }
    }
}

/// POST /api/mcp/test-connection
///
/// Probes the remote gateway with a one-contact listing. Credential
/// validation failures are 400; a reachable-but-unhappy gateway reports
/// `success: false` in a 200 body so the caller can show the remote error.
pub async fn post_test_connection(
    State(state): State<GatewayState>,
    Json(body): Json<TestConnectionRequest>,
) -> Response {
    let credentials = Credentials::new(body.ghl_token, body.location_id);
    if let Err(err) = credentials.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": err.to_string()})),
        )
            .into_response();
    }

    match state
        .ghl
        .call(GhlTool::ContactsGetContacts, json!({"limit": 1}), &credentials)
        .await
    {
        Ok(sample) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "GoHighLevel connection successful",
                "sample": sample,
            })),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "connection test failed");
            (
                StatusCode::OK,
                Json(json!({"success": false, "error": err.to_string()})),
            )
                .into_response()
        }
    }
}

/// GET /api/mcp/test-ai
///
/// Liveness probe for the LLM dependency.
pub async fn get_test_ai(State(state): State<GatewayState>) -> Response {
    match state
        .llm
        .complete("You are a connectivity probe. Reply with a short greeting.", "Hello")
        .await
    {
        Ok(text) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "AI connection successful",
                "response": text,
            })),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "AI connectivity test failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": err.to_string()})),
            )
                .into_response()
        }
    }
}

/// GET /api/health
pub async fn get_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserializes_camel_case() {
        let json = r#"{"message": "hi", "ghlToken": "pit-0123456789", "locationId": "loc-0123456789"}"#;
        let req: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.message, "hi");
        assert_eq!(req.ghl_token, "pit-0123456789");
        assert_eq!(req.location_id, "loc-0123456789");
    }

    #[test]
    fn chat_request_tolerates_missing_fields() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_empty());
        assert!(req.ghl_token.is_empty());
    }

    #[test]
    fn chat_response_serializes_camel_case() {
        let resp = ChatResponse {
            response: "done".to_string(),
            ghl_data: None,
            action_taken: "get_all_contacts".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"ghlData\":null"));
        assert!(json.contains("\"actionTaken\":\"get_all_contacts\""));
    }

    #[test]
    fn validation_errors_map_to_400() {
        let response = error_response(SquatchError::Validation("message is required".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_map_to_500() {
        let response = error_response(SquatchError::Internal("boom".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
