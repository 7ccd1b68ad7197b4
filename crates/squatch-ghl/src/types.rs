// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-RPC 2.0 envelope types and response-body parsing for the GHL
//! MCP endpoint.
//!
//! The remote accepts a `tools/call` request and answers with either plain
//! JSON or an event-stream-flavored body (`data: {...}` lines). Tool payloads
//! arrive wrapped in an MCP result as `result.content[0].text`, itself
//! usually a JSON document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use squatch_core::{GhlTool, SquatchError};

/// `params` of a `tools/call` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    /// Remote tool identifier (`<domain>_<verb>-<noun>`).
    pub name: String,
    /// Arbitrary JSON-serializable arguments mapping.
    pub arguments: Value,
}

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: ToolCallParams,
}

impl JsonRpcRequest {
    /// Build a `tools/call` envelope. Construction is deterministic for a
    /// given `(id, tool, arguments)` triple.
    pub fn tool_call(id: u64, tool: GhlTool, arguments: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: "tools/call".to_string(),
            params: ToolCallParams {
                name: tool.to_string(),
                arguments,
            },
        }
    }
}

/// JSON-RPC error object, if the remote reports one inside a 2xx body.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Parse a response body that is either plain JSON or SSE-flavored.
///
/// SSE-flavored bodies carry `data: {...}` lines; the first line whose payload
/// parses as JSON wins.
pub fn parse_response_body(body: &str) -> Result<Value, SquatchError> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return Ok(value);
    }

    for line in body.lines() {
        let Some(payload) = line.strip_prefix("data:") else {
            continue;
        };
        if let Ok(value) = serde_json::from_str::<Value>(payload.trim()) {
            return Ok(value);
        }
    }

    Err(SquatchError::Gateway {
        status: None,
        message: format!(
            "unparseable response body from tool endpoint ({} bytes)",
            body.len()
        ),
    })
}

/// Unwrap a parsed JSON-RPC response into the tool's own payload.
///
/// A `result.content[0].text` string that parses as JSON is returned as that
/// JSON; a non-JSON text becomes a JSON string; anything else falls back to
/// the `result` (or the whole body when no `result` key exists). An embedded
/// JSON-RPC `error` object is surfaced as a gateway error.
pub fn unwrap_tool_result(value: Value) -> Result<Value, SquatchError> {
    if let Some(error) = value.get("error") {
        let rpc_err: Result<JsonRpcError, _> = serde_json::from_value(error.clone());
        let message = match rpc_err {
            Ok(e) => format!("remote tool error (code {}): {}", e.code, e.message),
            Err(_) => format!("remote tool error: {error}"),
        };
        return Err(SquatchError::Gateway {
            status: None,
            message,
        });
    }

    let Some(result) = value.get("result") else {
        return Ok(value);
    };

    let text = result
        .get("content")
        .and_then(|c| c.get(0))
        .and_then(|block| block.get("text"))
        .and_then(|t| t.as_str());

    match text {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(inner) => Ok(inner),
            Err(_) => Ok(Value::String(text.to_string())),
        },
        None => Ok(result.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_call_envelope_shape() {
        let req = JsonRpcRequest::tool_call(
            7,
            GhlTool::ContactsGetContacts,
            json!({"limit": 50}),
        );
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 7);
        assert_eq!(value["method"], "tools/call");
        assert_eq!(value["params"]["name"], "contacts_get-contacts");
        assert_eq!(value["params"]["arguments"]["limit"], 50);
    }

    #[test]
    fn envelope_construction_is_idempotent_modulo_id() {
        // Serializing then parsing must reproduce the same name/arguments pair.
        let args = json!({"firstName": "John", "email": "john@example.com"});
        let req = JsonRpcRequest::tool_call(1, GhlTool::ContactsCreateContact, args.clone());
        let json = serde_json::to_string(&req).unwrap();
        let parsed: JsonRpcRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.params.name, "contacts_create-contact");
        assert_eq!(parsed.params.arguments, args);

        let again = JsonRpcRequest::tool_call(2, GhlTool::ContactsCreateContact, args.clone());
        assert_eq!(again.params.name, parsed.params.name);
        assert_eq!(again.params.arguments, parsed.params.arguments);
    }

    #[test]
    fn parse_plain_json_body() {
        let value = parse_response_body(r#"{"result": {"ok": true}}"#).unwrap();
        assert_eq!(value["result"]["ok"], true);
    }

    #[test]
    fn parse_event_stream_flavored_body() {
        let body = "event: message\ndata: {\"result\":{\"contacts\":[]}}\n\n";
        let value = parse_response_body(body).unwrap();
        assert!(value["result"]["contacts"].is_array());
    }

    #[test]
    fn parse_garbage_body_fails() {
        assert!(parse_response_body("not json at all").is_err());
    }

    #[test]
    fn unwrap_mcp_text_content_as_json() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "content": [{"type": "text", "text": "{\"contacts\":[{\"firstName\":\"Ada\"}]}"}]
            }
        });
        let result = unwrap_tool_result(body).unwrap();
        assert_eq!(result["contacts"][0]["firstName"], "Ada");
    }

    #[test]
    fn unwrap_non_json_text_becomes_string() {
        let body = json!({
            "result": {"content": [{"type": "text", "text": "3 contacts found"}]}
        });
        let result = unwrap_tool_result(body).unwrap();
        assert_eq!(result, Value::String("3 contacts found".to_string()));
    }

    #[test]
    fn unwrap_plain_result_passes_through() {
        let body = json!({"result": {"contacts": []}});
        let result = unwrap_tool_result(body).unwrap();
        assert!(result["contacts"].is_array());
    }

    #[test]
    fn unwrap_rpc_error_is_gateway_error() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32000, "message": "invalid token"}
        });
        let err = unwrap_tool_result(body).unwrap_err();
        assert!(err.to_string().contains("invalid token"));
    }

    #[test]
    fn unwrap_bodyless_value_passes_through() {
        let body = json!({"contacts": []});
        let result = unwrap_tool_result(body).unwrap();
        assert!(result["contacts"].is_array());
    }
}
