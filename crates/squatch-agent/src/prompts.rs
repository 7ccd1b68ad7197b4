// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed prompt preambles and canned user-facing strings.

use serde_json::Value;

/// Static fallback when the summarization call fails. Shown verbatim.
pub const SUMMARY_APOLOGY: &str =
    "Sorry, I ran into a problem generating a response. Please try again in a moment.";

/// Clarifying question when contact creation lacks a usable name.
pub const CREATE_CONTACT_CLARIFICATION: &str =
    "I'd be happy to create that contact. Could you give me at least a first or last name? \
     An email address or phone number helps too.";

/// System preamble for the final natural-language summarization call.
const SUMMARY_PREAMBLE: &str = "You are an AI assistant for GoHighLevel CRM. You help users \
interact with their CRM data through natural language.

Available actions:
- Get contacts, create contacts, update contacts, manage contact tags
- View calendar events and appointments
- Access conversations and send messages
- Manage opportunities and deals
- View payment transactions and orders

Provide helpful, conversational responses. If you retrieved data, summarize it in a \
user-friendly way.";

/// Build the summarization system prompt, embedding the tool result when one exists.
pub fn summary_prompt(tool_result: Option<&Value>) -> String {
    match tool_result {
        Some(data) => {
            let serialized =
                serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
            format!("{SUMMARY_PREAMBLE}\n\nHere is the data from GoHighLevel:\n{serialized}")
        }
        None => SUMMARY_PREAMBLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_without_data_is_the_preamble() {
        let prompt = summary_prompt(None);
        assert!(prompt.contains("GoHighLevel CRM"));
        assert!(!prompt.contains("Here is the data"));
    }

    #[test]
    fn prompt_with_data_embeds_serialized_result() {
        let data = json!({"contacts": [{"firstName": "Ada"}]});
        let prompt = summary_prompt(Some(&data));
        assert!(prompt.contains("Here is the data"));
        assert!(prompt.contains("Ada"));
    }
}
