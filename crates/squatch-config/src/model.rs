// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Squatch configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SquatchConfig {
    /// Process-wide settings (log level).
    #[serde(default)]
    pub agent: AgentConfig,

    /// HTTP server bind address and inbound auth.
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenAI chat-completions API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// GoHighLevel MCP endpoint settings.
    #[serde(default)]
    pub ghl: GhlConfig,

    /// Per-client request rate limiting.
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Intent resolution strategy.
    #[serde(default)]
    pub intent: IntentConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional static API key required in the `x-api-key` header.
    /// `None` disables inbound auth entirely.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// OpenAI API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// OpenAI API key. `None` falls back to the `OPENAI_API_KEY` env var.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completions API (overridable for testing).
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Model identifier for intent resolution and summarization.
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

/// GoHighLevel MCP endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GhlConfig {
    /// URL of the remote tool-call endpoint.
    #[serde(default = "default_mcp_url")]
    pub mcp_url: String,
}

impl Default for GhlConfig {
    fn default() -> Self {
        Self {
            mcp_url: default_mcp_url(),
        }
    }
}

fn default_mcp_url() -> String {
    "https://services.leadconnectorhq.com/mcp/".to_string()
}

/// Fixed-window rate limiting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitConfig {
    /// Enable the limiter on /api/mcp routes.
    #[serde(default = "default_rate_limit_enabled")]
    pub enabled: bool,

    /// Maximum requests per client per window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Window duration in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_rate_limit_enabled(),
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

fn default_rate_limit_enabled() -> bool {
    true
}

fn default_max_requests() -> u32 {
    100
}

fn default_window_secs() -> u64 {
    15 * 60
}

/// Intent resolution strategy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntentConfig {
    /// Strategy name: "model" (LLM-assisted, with keyword fallback) or "keyword".
    #[serde(default = "default_intent_strategy")]
    pub strategy: String,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            strategy: default_intent_strategy(),
        }
    }
}

fn default_intent_strategy() -> String {
    "model".to_string()
}
