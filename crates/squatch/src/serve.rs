// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `squatch serve` command implementation.
//!
//! Wires the configured intent strategy, the GoHighLevel client, and the
//! OpenAI client into the chat orchestrator, then serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use squatch_agent::ChatOrchestrator;
use squatch_config::SquatchConfig;
use squatch_core::SquatchError;
use squatch_gateway::{start_server, FixedWindowLimiter, GatewayState, ServerConfig};
use squatch_ghl::GhlClient;
use squatch_intent::{IntentResolver, KeywordResolver, ModelResolver};
use squatch_openai::OpenAiClient;

/// Clients and the orchestrator assembled from configuration.
pub(crate) struct Components {
    pub orchestrator: Arc<ChatOrchestrator>,
    pub ghl: Arc<GhlClient>,
    pub llm: Arc<OpenAiClient>,
}

/// Build the client stack from configuration.
///
/// The OpenAI key comes from config or the `OPENAI_API_KEY` environment
/// variable; without one the process refuses to start, since both intent
/// resolution and summarization need the LLM.
pub(crate) fn build_components(config: &SquatchConfig) -> Result<Components, SquatchError> {
    let api_key = config
        .openai
        .api_key
        .clone()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .ok_or_else(|| {
            SquatchError::Config(
                "OpenAI API key required: set openai.api_key or the OPENAI_API_KEY environment variable".to_string(),
            )
        })?;

    let llm = Arc::new(OpenAiClient::new(
        &api_key,
        config.openai.base_url.clone(),
        config.openai.model.clone(),
        config.openai.max_tokens,
        config.openai.temperature,
    )?);
    let ghl = Arc::new(GhlClient::new(config.ghl.mcp_url.clone())?);

    let resolver: Arc<dyn IntentResolver> = match config.intent.strategy.as_str() {
        "keyword" => Arc::new(KeywordResolver::new()),
        _ => Arc::new(ModelResolver::new(Arc::clone(&llm))),
    };
    info!(strategy = %config.intent.strategy, "intent resolver selected");

    let orchestrator = Arc::new(ChatOrchestrator::new(
        resolver,
        Arc::clone(&ghl),
        Arc::clone(&llm),
    ));

    Ok(Components {
        orchestrator,
        ghl,
        llm,
    })
}

/// Runs the `squatch serve` command.
pub async fn run_serve(config: SquatchConfig) -> Result<(), SquatchError> {
    init_tracing(&config.agent.log_level);

    info!("starting squatch serve");

    let components = build_components(&config)?;
    let state = GatewayState {
        orchestrator: components.orchestrator,
        ghl: components.ghl,
        llm: components.llm,
    };

    let limiter = Arc::new(FixedWindowLimiter::new(
        config.rate_limit.enabled,
        config.rate_limit.max_requests,
        Duration::from_secs(config.rate_limit.window_secs),
    ));

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        api_key: config.server.api_key.clone(),
    };

    start_server(&server_config, state, limiter).await
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("squatch={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
