// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for values serde cannot express.

use squatch_core::SquatchError;

use crate::model::SquatchConfig;

/// Validate a deserialized config, collecting every problem into one error.
pub fn validate_config(config: &SquatchConfig) -> Result<(), SquatchError> {
    let mut problems = Vec::new();

    match config.intent.strategy.as_str() {
        "model" | "keyword" => {}
        other => problems.push(format!(
            "intent.strategy must be \"model\" or \"keyword\", got \"{other}\""
        )),
    }

    if config.rate_limit.enabled {
        if config.rate_limit.max_requests == 0 {
            problems.push("rate_limit.max_requests must be at least 1".to_string());
        }
        if config.rate_limit.window_secs == 0 {
            problems.push("rate_limit.window_secs must be at least 1".to_string());
        }
    }

    if !(0.0..=2.0).contains(&config.openai.temperature) {
        problems.push(format!(
            "openai.temperature must be in 0.0..=2.0, got {}",
            config.openai.temperature
        ));
    }

    if config.openai.max_tokens == 0 {
        problems.push("openai.max_tokens must be at least 1".to_string());
    }

    if !config.ghl.mcp_url.starts_with("http://") && !config.ghl.mcp_url.starts_with("https://") {
        problems.push(format!(
            "ghl.mcp_url must be an http(s) URL, got \"{}\"",
            config.ghl.mcp_url
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SquatchError::Config(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SquatchConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&SquatchConfig::default()).is_ok());
    }

    #[test]
    fn rejects_unknown_intent_strategy() {
        let mut config = SquatchConfig::default();
        config.intent.strategy = "vibes".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("intent.strategy"));
    }

    #[test]
    fn rejects_zero_rate_limit_when_enabled() {
        let mut config = SquatchConfig::default();
        config.rate_limit.max_requests = 0;
        assert!(validate_config(&config).is_err());

        // Disabled limiter skips the check.
        config.rate_limit.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn collects_multiple_problems() {
        let mut config = SquatchConfig::default();
        config.intent.strategy = "nope".to_string();
        config.openai.temperature = 5.0;
        config.ghl.mcp_url = "not-a-url".to_string();
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("intent.strategy"));
        assert!(err.contains("temperature"));
        assert!(err.contains("mcp_url"));
    }
}
