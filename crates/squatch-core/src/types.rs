// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared domain types: the remote tool catalog, resolved intents,
//! credentials, and the chat outcome triple.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Minimum length for both credential strings before any remote call is attempted.
pub const MIN_CREDENTIAL_LEN: usize = 10;

/// Sentinel `action_taken` value when no remote tool was invoked.
pub const GENERAL_CONVERSATION: &str = "general_conversation";

/// The closed set of remote tools exposed by the GoHighLevel MCP endpoint.
///
/// Spellings follow the remote `<domain>_<verb>-<noun>` convention and must
/// round-trip exactly: they are sent verbatim as `params.name` on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum GhlTool {
    #[strum(serialize = "calendars_get-calendar-events")]
    #[serde(rename = "calendars_get-calendar-events")]
    CalendarsGetCalendarEvents,
    #[strum(serialize = "calendars_get-appointment-notes")]
    #[serde(rename = "calendars_get-appointment-notes")]
    CalendarsGetAppointmentNotes,
    #[strum(serialize = "contacts_get-all-tasks")]
    #[serde(rename = "contacts_get-all-tasks")]
    ContactsGetAllTasks,
    #[strum(serialize = "contacts_add-tags")]
    #[serde(rename = "contacts_add-tags")]
    ContactsAddTags,
    #[strum(serialize = "contacts_remove-tags")]
    #[serde(rename = "contacts_remove-tags")]
    ContactsRemoveTags,
    #[strum(serialize = "contacts_get-contact")]
    #[serde(rename = "contacts_get-contact")]
    ContactsGetContact,
    #[strum(serialize = "contacts_update-contact")]
    #[serde(rename = "contacts_update-contact")]
    ContactsUpdateContact,
    #[strum(serialize = "contacts_upsert-contact")]
    #[serde(rename = "contacts_upsert-contact")]
    ContactsUpsertContact,
    #[strum(serialize = "contacts_create-contact")]
    #[serde(rename = "contacts_create-contact")]
    ContactsCreateContact,
    #[strum(serialize = "contacts_get-contacts")]
    #[serde(rename = "contacts_get-contacts")]
    ContactsGetContacts,
    #[strum(serialize = "conversations_search-conversation")]
    #[serde(rename = "conversations_search-conversation")]
    ConversationsSearchConversation,
    #[strum(serialize = "conversations_get-messages")]
    #[serde(rename = "conversations_get-messages")]
    ConversationsGetMessages,
    #[strum(serialize = "conversations_send-a-new-message")]
    #[serde(rename = "conversations_send-a-new-message")]
    ConversationsSendANewMessage,
    #[strum(serialize = "locations_get-location")]
    #[serde(rename = "locations_get-location")]
    LocationsGetLocation,
    #[strum(serialize = "locations_get-custom-fields")]
    #[serde(rename = "locations_get-custom-fields")]
    LocationsGetCustomFields,
    #[strum(serialize = "opportunities_search-opportunity")]
    #[serde(rename = "opportunities_search-opportunity")]
    OpportunitiesSearchOpportunity,
    #[strum(serialize = "opportunities_get-pipelines")]
    #[serde(rename = "opportunities_get-pipelines")]
    OpportunitiesGetPipelines,
    #[strum(serialize = "opportunities_update-opportunity")]
    #[serde(rename = "opportunities_update-opportunity")]
    OpportunitiesUpdateOpportunity,
    #[strum(serialize = "opportunities_get-opportunity")]
    #[serde(rename = "opportunities_get-opportunity")]
    OpportunitiesGetOpportunity,
    #[strum(serialize = "payments_get-order-by-id")]
    #[serde(rename = "payments_get-order-by-id")]
    PaymentsGetOrderById,
    #[strum(serialize = "payments_list-transactions")]
    #[serde(rename = "payments_list-transactions")]
    PaymentsListTransactions,
}

/// Local dispatch keys the orchestrator branches on when building tool arguments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
pub enum ChatAction {
    #[strum(serialize = "get_all_contacts")]
    #[serde(rename = "get_all_contacts")]
    GetAllContacts,
    #[strum(serialize = "get_contact")]
    #[serde(rename = "get_contact")]
    GetContact,
    #[strum(serialize = "create_contact")]
    #[serde(rename = "create_contact")]
    CreateContact,
    #[strum(serialize = "update_contact")]
    #[serde(rename = "update_contact")]
    UpdateContact,
    #[strum(serialize = "add_contact_tags")]
    #[serde(rename = "add_contact_tags")]
    AddContactTags,
    #[strum(serialize = "remove_contact_tags")]
    #[serde(rename = "remove_contact_tags")]
    RemoveContactTags,
    #[strum(serialize = "get_calendar_events")]
    #[serde(rename = "get_calendar_events")]
    GetCalendarEvents,
    #[strum(serialize = "get_conversations")]
    #[serde(rename = "get_conversations")]
    GetConversations,
    #[strum(serialize = "send_message")]
    #[serde(rename = "send_message")]
    SendMessage,
    #[strum(serialize = "get_opportunities")]
    #[serde(rename = "get_opportunities")]
    GetOpportunities,
    #[strum(serialize = "get_transactions")]
    #[serde(rename = "get_transactions")]
    GetTransactions,
    #[strum(serialize = "get_appointment_notes")]
    #[serde(rename = "get_appointment_notes")]
    GetAppointmentNotes,
    #[strum(serialize = "get_contact_tasks")]
    #[serde(rename = "get_contact_tasks")]
    GetContactTasks,
    #[strum(serialize = "upsert_contact")]
    #[serde(rename = "upsert_contact")]
    UpsertContact,
    #[strum(serialize = "get_messages")]
    #[serde(rename = "get_messages")]
    GetMessages,
    #[strum(serialize = "get_location")]
    #[serde(rename = "get_location")]
    GetLocation,
    #[strum(serialize = "get_custom_fields")]
    #[serde(rename = "get_custom_fields")]
    GetCustomFields,
    #[strum(serialize = "get_pipelines")]
    #[serde(rename = "get_pipelines")]
    GetPipelines,
    #[strum(serialize = "get_opportunity")]
    #[serde(rename = "get_opportunity")]
    GetOpportunity,
    #[strum(serialize = "update_opportunity")]
    #[serde(rename = "update_opportunity")]
    UpdateOpportunity,
    #[strum(serialize = "get_order")]
    #[serde(rename = "get_order")]
    GetOrder,
}

impl GhlTool {
    /// The local dispatch key this tool maps to when the resolver does not
    /// name one explicitly. Total: every catalog entry has exactly one.
    pub fn default_action(&self) -> ChatAction {
        match self {
            GhlTool::CalendarsGetCalendarEvents => ChatAction::GetCalendarEvents,
            GhlTool::CalendarsGetAppointmentNotes => ChatAction::GetAppointmentNotes,
            GhlTool::ContactsGetAllTasks => ChatAction::GetContactTasks,
            GhlTool::ContactsAddTags => ChatAction::AddContactTags,
            GhlTool::ContactsRemoveTags => ChatAction::RemoveContactTags,
            GhlTool::ContactsGetContact => ChatAction::GetContact,
            GhlTool::ContactsUpdateContact => ChatAction::UpdateContact,
            GhlTool::ContactsUpsertContact => ChatAction::UpsertContact,
            GhlTool::ContactsCreateContact => ChatAction::CreateContact,
            GhlTool::ContactsGetContacts => ChatAction::GetAllContacts,
            GhlTool::ConversationsSearchConversation => ChatAction::GetConversations,
            GhlTool::ConversationsGetMessages => ChatAction::GetMessages,
            GhlTool::ConversationsSendANewMessage => ChatAction::SendMessage,
            GhlTool::LocationsGetLocation => ChatAction::GetLocation,
            GhlTool::LocationsGetCustomFields => ChatAction::GetCustomFields,
            GhlTool::OpportunitiesSearchOpportunity => ChatAction::GetOpportunities,
            GhlTool::OpportunitiesGetPipelines => ChatAction::GetPipelines,
            GhlTool::OpportunitiesUpdateOpportunity => ChatAction::UpdateOpportunity,
            GhlTool::OpportunitiesGetOpportunity => ChatAction::GetOpportunity,
            GhlTool::PaymentsGetOrderById => ChatAction::GetOrder,
            GhlTool::PaymentsListTransactions => ChatAction::GetTransactions,
        }
    }
}

/// The resolved mapping from a free-text message to a tool/action pair.
///
/// Ephemeral: recomputed per message, never persisted. A null intent means
/// the message is general conversation and no remote call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub tool: Option<GhlTool>,
    pub action: Option<ChatAction>,
}

impl Intent {
    /// Intent for a recognized tool call.
    pub fn new(tool: GhlTool, action: ChatAction) -> Self {
        Self {
            tool: Some(tool),
            action: Some(action),
        }
    }

    /// The null intent: no tool, no action.
    pub fn null() -> Self {
        Self {
            tool: None,
            action: None,
        }
    }

    /// Whether this intent carries no tool call.
    pub fn is_null(&self) -> bool {
        self.tool.is_none()
    }
}

/// Per-request GoHighLevel credentials: a private integration token plus the
/// location (sub-account) scope. Stateless server-side; supplied on every call.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub location_id: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            location_id: location_id.into(),
        }
    }

    /// Length-only format check; no remote verification happens here.
    pub fn validate(&self) -> Result<(), crate::SquatchError> {
        if self.token.len() < MIN_CREDENTIAL_LEN {
            return Err(crate::SquatchError::Validation(
                "invalid GHL token format".into(),
            ));
        }
        if self.location_id.len() < MIN_CREDENTIAL_LEN {
            return Err(crate::SquatchError::Validation(
                "invalid location ID format".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"[redacted]")
            .field("location_id", &self.location_id)
            .finish()
    }
}

/// The orchestrator's result triple for one handled message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutcome {
    /// Natural-language reply for the user.
    pub response: String,
    /// Raw tool result (or an inline `{"error": …}` object), if a tool ran.
    pub ghl_data: Option<serde_json::Value>,
    /// Resolved action name, or the `general_conversation` sentinel.
    pub action_taken: String,
}
