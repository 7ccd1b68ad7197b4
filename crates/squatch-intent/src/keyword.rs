// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword intent strategy: an ordered decision table of substring predicates.
//!
//! Evaluation order is significant and fixed: contacts (create, update, tag,
//! get sub-branches) before calendar before conversations before
//! opportunities before payments. First matching rule wins; no match yields
//! the null intent.

use squatch_core::{ChatAction, GhlTool, Intent};

/// One entry in the decision table.
type Rule = (fn(&str) -> bool, GhlTool, ChatAction);

fn any(message: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| message.contains(n))
}

fn wants_remove_contact_tags(m: &str) -> bool {
    m.contains("tag") && any(m, &["remove", "delete", "clear", "untag"])
}

fn wants_add_contact_tags(m: &str) -> bool {
    m.contains("tag") && any(m, &["add", "apply", "set", "tag "])
}

fn wants_create_contact(m: &str) -> bool {
    if !m.contains("contact") {
        return false;
    }
    // "add"/"new" are shared with the tag vocabulary; "create" is not, and
    // always means creation even when the message also mentions tagging.
    m.contains("create") || (any(m, &["add", "new"]) && !m.contains("tag"))
}

fn wants_update_contact(m: &str) -> bool {
    m.contains("contact") && any(m, &["update", "change", "edit"])
}

fn wants_all_contacts(m: &str) -> bool {
    m.contains("contact") && any(m, &["all", "list", "every"])
}

fn wants_single_contact(m: &str) -> bool {
    m.contains("contact") && any(m, &["get", "find", "show", "look", "see", "view"])
}

fn wants_calendar(m: &str) -> bool {
    any(m, &["calendar", "appointment", "event", "schedule"])
}

fn wants_send_message(m: &str) -> bool {
    m.contains("send") && any(m, &["message", "sms", "text", "email"])
}

fn wants_conversations(m: &str) -> bool {
    any(m, &["conversation", "message", "chat history"])
}

fn wants_opportunities(m: &str) -> bool {
    any(m, &["opportunity", "opportunities", "deal", "pipeline"])
}

fn wants_transactions(m: &str) -> bool {
    any(m, &["payment", "transaction", "invoice", "order"])
}

/// The fixed-priority decision table.
const RULES: &[Rule] = &[
    (
        wants_create_contact,
        GhlTool::ContactsCreateContact,
        ChatAction::CreateContact,
    ),
    (
        wants_update_contact,
        GhlTool::ContactsUpdateContact,
        ChatAction::UpdateContact,
    ),
    (
        wants_remove_contact_tags,
        GhlTool::ContactsRemoveTags,
        ChatAction::RemoveContactTags,
    ),
    (
        wants_add_contact_tags,
        GhlTool::ContactsAddTags,
        ChatAction::AddContactTags,
    ),
    (
        wants_all_contacts,
        GhlTool::ContactsGetContacts,
        ChatAction::GetAllContacts,
    ),
    (
        wants_single_contact,
        GhlTool::ContactsGetContact,
        ChatAction::GetContact,
    ),
    (
        wants_calendar,
        GhlTool::CalendarsGetCalendarEvents,
        ChatAction::GetCalendarEvents,
    ),
    (
        wants_send_message,
        GhlTool::ConversationsSendANewMessage,
        ChatAction::SendMessage,
    ),
    (
        wants_conversations,
        GhlTool::ConversationsSearchConversation,
        ChatAction::GetConversations,
    ),
    (
        wants_opportunities,
        GhlTool::OpportunitiesSearchOpportunity,
        ChatAction::GetOpportunities,
    ),
    (
        wants_transactions,
        GhlTool::PaymentsListTransactions,
        ChatAction::GetTransactions,
    ),
];

/// Keyword intent strategy. Zero cost, zero latency, no network.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResolver;

impl KeywordResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a message against the decision table.
    pub fn resolve_text(message: &str) -> Intent {
        let lower = message.to_lowercase();
        for (predicate, tool, action) in RULES {
            if predicate(&lower) {
                return Intent::new(*tool, *action);
            }
        }
        Intent::null()
    }

    /// The single highest-confidence rule, used as the fallback when model
    /// output cannot be parsed: contacts-list detection or nothing.
    pub fn fallback_rule(message: &str) -> Intent {
        if message.to_lowercase().contains("contact") {
            Intent::new(GhlTool::ContactsGetContacts, ChatAction::GetAllContacts)
        } else {
            Intent::null()
        }
    }
}
