// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM-backed contact-field extraction for the create-contact path.
//!
//! The extractor asks the model for a JSON object of candidate fields from
//! the raw message. Failure is a value, not an exception: the orchestrator
//! branches on [`Extraction::Unusable`] to ask a clarifying question instead
//! of calling the gateway.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use squatch_core::SquatchError;
use squatch_openai::OpenAiClient;

use crate::fences::strip_code_fences;

/// Candidate contact fields pulled from a free-text message.
///
/// Field names match the remote tool's argument keys and serialize as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactFields {
    /// Whether any name-like field is present. Creation without one is refused.
    pub fn has_name(&self) -> bool {
        self.first_name.as_deref().is_some_and(|s| !s.is_empty())
            || self.last_name.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Tool arguments mapping, omitting absent fields.
    pub fn to_arguments(&self) -> Value {
        // serde skips the None fields.
        serde_json::to_value(self).unwrap_or_else(|_| json!({}))
    }
}

/// Outcome of an extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Usable fields including at least one name component.
    Fields(ContactFields),
    /// Model output unusable or no name-like field present; the caller should
    /// ask the user to clarify rather than call the gateway.
    Unusable,
}

/// Parse raw model output into contact fields.
pub fn parse_contact_fields(output: &str) -> Option<ContactFields> {
    let stripped = strip_code_fences(output);
    serde_json::from_str(stripped).ok()
}

/// LLM-backed field extractor.
#[derive(Clone)]
pub struct ContactExtractor {
    llm: Arc<OpenAiClient>,
}

impl ContactExtractor {
    pub fn new(llm: Arc<OpenAiClient>) -> Self {
        Self { llm }
    }

    /// Extract candidate contact fields from a message.
    ///
    /// LLM failures are folded into `Unusable` rather than propagated; the
    /// orchestrator treats both identically.
    pub async fn extract(&self, message: &str) -> Result<Extraction, SquatchError> {
        const PROMPT: &str = "Extract contact fields from the user's message. Respond with ONLY \
                              a JSON object with any of the keys \"firstName\", \"lastName\", \
                              \"email\", \"phone\" that are present in the message. Omit keys \
                              you cannot find. No prose, no markdown.";

        let output = match self.llm.complete(PROMPT, message).await {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "contact extraction call failed");
                return Ok(Extraction::Unusable);
            }
        };

        match parse_contact_fields(&output) {
            Some(fields) if fields.has_name() => Ok(Extraction::Fields(fields)),
            Some(_) | None => Ok(Extraction::Unusable),
        }
    }
}
