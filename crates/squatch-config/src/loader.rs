// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./squatch.toml` > `~/.config/squatch/squatch.toml`
//! > `/etc/squatch/squatch.toml` with environment variable overrides via
//! the `SQUATCH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SquatchConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/squatch/squatch.toml` (system-wide)
/// 3. `~/.config/squatch/squatch.toml` (user XDG config)
/// 4. `./squatch.toml` (local directory)
/// 5. `SQUATCH_*` environment variables
pub fn load_config() -> Result<SquatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SquatchConfig::default()))
        .merge(Toml::file("/etc/squatch/squatch.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("squatch/squatch.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("squatch.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SquatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SquatchConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SquatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SquatchConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SQUATCH_RATE_LIMIT_MAX_REQUESTS` must map
/// to `rate_limit.max_requests`, not `rate.limit.max.requests`.
fn env_provider() -> Env {
    Env::prefixed("SQUATCH_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("server_", "server.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("ghl_", "ghl.", 1)
            .replacen("rate_limit_", "rate_limit.", 1)
            .replacen("intent_", "intent.", 1);
        mapped.into()
    })
}
