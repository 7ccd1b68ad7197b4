// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The chat orchestrator: one request-response cycle per user message.
//!
//! Pipeline: validate, resolve intent, optionally invoke the remote tool
//! gateway, then summarize via the LLM. Gateway failures fold into an inline
//! `{"error": …}` payload and summarization failures into a static apology;
//! only validation failures propagate as errors to the HTTP layer.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tracing::{debug, warn};

use squatch_core::{
    ChatAction, ChatOutcome, Credentials, SquatchError, GENERAL_CONVERSATION,
};
use squatch_ghl::GhlClient;
use squatch_intent::{ContactExtractor, Extraction, IntentResolver};
use squatch_openai::OpenAiClient;

use crate::prompts::{summary_prompt, CREATE_CONTACT_CLARIFICATION, SUMMARY_APOLOGY};

/// Orchestrates intent resolution, tool dispatch, and response composition.
pub struct ChatOrchestrator {
    resolver: Arc<dyn IntentResolver>,
    ghl: Arc<GhlClient>,
    llm: Arc<OpenAiClient>,
    extractor: ContactExtractor,
}

impl ChatOrchestrator {
    pub fn new(
        resolver: Arc<dyn IntentResolver>,
        ghl: Arc<GhlClient>,
        llm: Arc<OpenAiClient>,
    ) -> Self {
        let extractor = ContactExtractor::new(Arc::clone(&llm));
        Self {
            resolver,
            ghl,
            llm,
            extractor,
        }
    }

    /// Handle one user message with the caller's credentials.
    ///
    /// Errors returned here are validation failures only; everything further
    /// down the pipeline degrades into the outcome instead of failing it.
    pub async fn handle(
        &self,
        message: &str,
        credentials: &Credentials,
    ) -> Result<ChatOutcome, SquatchError> {
        if message.trim().is_empty() {
            return Err(SquatchError::Validation("message is required".into()));
        }
        credentials.validate()?;

        let intent = self.resolver.resolve(message).await;
        debug!(?intent, "intent resolved");

        let mut ghl_data: Option<Value> = None;

        if let (Some(tool), Some(action)) = (intent.tool, intent.action) {
            let arguments = if action == ChatAction::CreateContact {
                match self.extractor.extract(message).await? {
                    Extraction::Fields(fields) => fields.to_arguments(),
                    Extraction::Unusable => {
                        // No usable name: ask instead of calling the gateway.
                        return Ok(ChatOutcome {
                            response: CREATE_CONTACT_CLARIFICATION.to_string(),
                            ghl_data: None,
                            action_taken: action.to_string(),
                        });
                    }
                }
            } else {
                arguments_for(action)
            };

            ghl_data = Some(
                match self.ghl.call(tool, arguments, credentials).await {
                    Ok(data) => data,
                    Err(e) => {
                        warn!(tool = %tool, error = %e, "tool call failed");
                        json!({"error": e.to_string()})
                    }
                },
            );
        }

        let response = match self
            .llm
            .complete(&summary_prompt(ghl_data.as_ref()), message)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "summarization failed, using static fallback");
                SUMMARY_APOLOGY.to_string()
            }
        };

        Ok(ChatOutcome {
            response,
            ghl_data,
            action_taken: intent
                .action
                .map(|a| a.to_string())
                .unwrap_or_else(|| GENERAL_CONVERSATION.to_string()),
        })
    }
}

/// Action-specific default arguments for tool invocation.
fn arguments_for(action: ChatAction) -> Value {
    match action {
        ChatAction::GetAllContacts | ChatAction::GetContact => json!({"limit": 50}),
        ChatAction::GetCalendarEvents => {
            let today = Utc::now().date_naive();
            let end = today + Duration::days(7);
            json!({
                "startDate": today.format("%Y-%m-%d").to_string(),
                "endDate": end.format("%Y-%m-%d").to_string(),
            })
        }
        ChatAction::GetConversations | ChatAction::GetOpportunities
        | ChatAction::GetTransactions => json!({"limit": 20}),
        _ => json!({}),
    }
}
