// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the chat assistant API.

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use squatch_agent::ChatOrchestrator;
use squatch_core::SquatchError;
use squatch_ghl::GhlClient;
use squatch_openai::OpenAiClient;

use crate::auth::{api_key_middleware, ApiKeyConfig};
use crate::handlers;
use crate::ratelimit::{rate_limit_middleware, FixedWindowLimiter};

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The chat pipeline behind POST /api/mcp/chat.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Remote tool gateway client, used directly by the connection probe.
    pub ghl: Arc<GhlClient>,
    /// LLM client, used directly by the AI liveness probe.
    pub llm: Arc<OpenAiClient>,
}

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Static API key for inbound requests (None = auth disabled).
    pub api_key: Option<String>,
}

/// Assemble the application router.
///
/// `/api/health` stays outside both middleware layers so orchestrators can
/// probe it without a key and without consuming rate-limit budget.
pub fn build_router(state: GatewayState, api_key: ApiKeyConfig, limiter: Arc<FixedWindowLimiter>) -> Router {
    let public_routes = Router::new().route("/api/health", get(handlers::get_health));

    let api_routes = Router::new()
        .route("/api/mcp/chat", post(handlers::post_chat))
        .route("/api/mcp/test-connection", post(handlers::post_test_connection))
        .route("/api/mcp/test-ai", get(handlers::get_test_ai))
        .route_layer(axum_middleware::from_fn_with_state(
            api_key,
            api_key_middleware,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until the process stops.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    limiter: Arc<FixedWindowLimiter>,
) -> Result<(), SquatchError> {
    let api_key = ApiKeyConfig {
        api_key: config.api_key.clone(),
    };
    let app = build_router(state, api_key, limiter);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SquatchError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .map_err(|e| SquatchError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use http::{header::CONTENT_TYPE, Request, StatusCode};
    use serde_json::{json, Value};
    use squatch_intent::KeywordResolver;
    use tower::ServiceExt;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test",
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    struct TestApp {
        router: Router,
        _ghl_server: MockServer,
        _llm_server: MockServer,
    }

    async fn test_app(api_key: Option<&str>, max_requests: u32) -> TestApp {
        let ghl_server = MockServer::start().await;
        let llm_server = MockServer::start().await;
        let router = router_for(&ghl_server, &llm_server, api_key, max_requests);
        TestApp {
            router,
            _ghl_server: ghl_server,
            _llm_server: llm_server,
        }
    }

    fn router_for(
        ghl_server: &MockServer,
        llm_server: &MockServer,
        api_key: Option<&str>,
        max_requests: u32,
    ) -> Router {
        let ghl = Arc::new(GhlClient::new(ghl_server.uri()).unwrap());
        let llm = Arc::new(
            OpenAiClient::new("test-key", llm_server.uri(), "gpt-4o-mini", 500, 0.0).unwrap(),
        );
        let orchestrator = Arc::new(ChatOrchestrator::new(
            Arc::new(KeywordResolver::new()),
            Arc::clone(&ghl),
            Arc::clone(&llm),
        ));
        let state = GatewayState {
            orchestrator,
            ghl,
            llm,
        };
        build_router(
            state,
            ApiKeyConfig {
                api_key: api_key.map(String::from),
            },
            Arc::new(FixedWindowLimiter::new(
                true,
                max_requests,
                Duration::from_secs(60),
            )),
        )
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = test_app(Some("secret"), 100).await;
        let response = app
            .router
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn chat_missing_message_is_400() {
        let app = test_app(None, 100).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app._ghl_server)
            .await;

        let response = app
            .router
            .oneshot(post_json(
                "/api/mcp/chat",
                json!({"ghlToken": "pit-0123456789", "locationId": "loc-0123456789"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("message"));
    }

    #[tokio::test]
    async fn chat_short_token_is_400_without_outbound_calls() {
        let app = test_app(None, 100).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app._ghl_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app._llm_server)
            .await;

        let response = app
            .router
            .oneshot(post_json(
                "/api/mcp/chat",
                json!({
                    "message": "show all contacts",
                    "ghlToken": "short",
                    "locationId": "loc-0123456789"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_happy_path_returns_outcome() {
        let app = test_app(None, 100).await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "tools/call"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"contacts": [{"firstName": "Ada"}]}
            })))
            .mount(&app._ghl_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body("You have 1 contact.")),
            )
            .mount(&app._llm_server)
            .await;

        let response = app
            .router
            .oneshot(post_json(
                "/api/mcp/chat",
                json!({
                    "message": "Show me all my contacts",
                    "ghlToken": "pit-0123456789",
                    "locationId": "loc-0123456789"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], "You have 1 contact.");
        assert_eq!(body["actionTaken"], "get_all_contacts");
        assert!(body["ghlData"]["contacts"].is_array());
    }

    #[tokio::test]
    async fn test_connection_short_token_is_400_without_outbound_calls() {
        let app = test_app(None, 100).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app._ghl_server)
            .await;

        let response = app
            .router
            .oneshot(post_json(
                "/api/mcp/test-connection",
                json!({"ghlToken": "short", "locationId": "loc-0123456789"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_connection_probes_one_contact() {
        let app = test_app(None, 100).await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "params": {"name": "contacts_get-contacts", "arguments": {"limit": 1}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"contacts": [{"firstName": "Ada"}]}
            })))
            .expect(1)
            .mount(&app._ghl_server)
            .await;

        let response = app
            .router
            .oneshot(post_json(
                "/api/mcp/test-connection",
                json!({"ghlToken": "pit-0123456789", "locationId": "loc-0123456789"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["sample"]["contacts"].is_array());
    }

    #[tokio::test]
    async fn test_connection_reports_remote_failure_in_body() {
        let app = test_app(None, 100).await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "invalid token"})),
            )
            .mount(&app._ghl_server)
            .await;

        let response = app
            .router
            .oneshot(post_json(
                "/api/mcp/test-connection",
                json!({"ghlToken": "pit-0123456789", "locationId": "loc-0123456789"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("invalid token"));
    }

    #[tokio::test]
    async fn test_ai_reports_liveness() {
        let app = test_app(None, 100).await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hello!")))
            .mount(&app._llm_server)
            .await;

        let response = app
            .router
            .oneshot(
                Request::builder()
                    .uri("/api/mcp/test-ai")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["response"], "Hello!");
    }

    #[tokio::test]
    async fn wrong_api_key_is_401() {
        let app = test_app(Some("secret"), 100).await;
        let response = app
            .router
            .oneshot(post_json(
                "/api/mcp/chat",
                json!({
                    "message": "hi",
                    "ghlToken": "pit-0123456789",
                    "locationId": "loc-0123456789"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn correct_api_key_passes() {
        let app = test_app(Some("secret"), 100).await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi there!")))
            .mount(&app._llm_server)
            .await;

        let mut request = post_json(
            "/api/mcp/chat",
            json!({
                "message": "good morning",
                "ghlToken": "pit-0123456789",
                "locationId": "loc-0123456789"
            }),
        );
        request
            .headers_mut()
            .insert("x-api-key", "secret".parse().unwrap());

        let response = app.router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn second_request_over_limit_is_429_with_retry_after() {
        let app = test_app(None, 1).await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hello!")))
            .mount(&app._llm_server)
            .await;

        let body = json!({
            "message": "good morning",
            "ghlToken": "pit-0123456789",
            "locationId": "loc-0123456789"
        });

        let first = app
            .router
            .clone()
            .oneshot(post_json("/api/mcp/chat", body.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .router
            .oneshot(post_json("/api/mcp/chat", body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(second).await;
        assert!(body["retryAfter"].as_u64().unwrap() >= 1);
    }
}
