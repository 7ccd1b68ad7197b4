// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-assisted intent strategy.
//!
//! Asks the LLM for a `{"tool": ..., "action": ...}` JSON object from the
//! closed tool catalog. Malformed output never escapes this component: it
//! degrades to the single highest-confidence keyword rule or the null intent.

use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

use squatch_core::{ChatAction, GhlTool, Intent};
use squatch_openai::OpenAiClient;

use crate::fences::strip_code_fences;
use crate::keyword::KeywordResolver;

/// Raw shape the model is instructed to emit.
#[derive(Debug, Deserialize)]
struct RawIntent {
    tool: Option<String>,
    action: Option<String>,
}

/// Model-assisted intent strategy with keyword fallback.
#[derive(Clone)]
pub struct ModelResolver {
    llm: Arc<OpenAiClient>,
}

impl ModelResolver {
    pub fn new(llm: Arc<OpenAiClient>) -> Self {
        Self { llm }
    }

    /// Resolve via the LLM; degrade to the fallback rule on any failure.
    pub async fn resolve_message(&self, message: &str) -> Intent {
        let prompt = intent_prompt();
        let raw = match self.llm.complete(&prompt, message).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "intent model call failed, using keyword fallback");
                return KeywordResolver::fallback_rule(message);
            }
        };

        match parse_intent(&raw) {
            Some(intent) => intent,
            None => {
                debug!(output = %raw, "unparseable intent output, using keyword fallback");
                KeywordResolver::fallback_rule(message)
            }
        }
    }
}

/// Parse model output into an intent.
///
/// Returns `None` when the output is not the requested JSON shape or names a
/// tool outside the catalog. A well-formed `{"tool": null}` is a successful
/// null intent, not a parse failure.
pub fn parse_intent(output: &str) -> Option<Intent> {
    let stripped = strip_code_fences(output);
    let raw: RawIntent = serde_json::from_str(stripped).ok()?;

    let Some(tool_name) = raw.tool else {
        return Some(Intent::null());
    };
    let tool = GhlTool::from_str(&tool_name).ok()?;

    // A missing or unrecognized action falls back to the tool's own dispatch key.
    let action = raw
        .action
        .and_then(|a| ChatAction::from_str(&a).ok())
        .unwrap_or_else(|| tool.default_action());

    Some(Intent::new(tool, action))
}

/// The fixed instruction prompt enumerating the valid tool identifiers.
fn intent_prompt() -> String {
    let tools: Vec<String> = GhlTool::iter().map(|t| format!("- {t}")).collect();
    format!(
        "You map a CRM user's message to at most one GoHighLevel tool call.\n\
         Valid tool identifiers:\n{}\n\n\
         Respond with ONLY a JSON object of the form\n\
         {{\"tool\": \"<tool identifier>\", \"action\": \"<snake_case action>\"}}\n\
         If the message needs no tool, respond with {{\"tool\": null, \"action\": null}}.\n\
         No prose, no markdown.",
        tools.join("\n")
    )
}
