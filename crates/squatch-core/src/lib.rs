// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Squatch CRM assistant.
//!
//! Provides the error type and the domain types shared across the workspace:
//! the remote tool catalog, resolved intents, request credentials, and the
//! chat outcome triple returned by the orchestrator.

pub mod error;
pub mod types;

pub use error::SquatchError;
pub use types::{
    ChatAction, ChatOutcome, Credentials, GhlTool, Intent, GENERAL_CONVERSATION,
    MIN_CREDENTIAL_LEN,
};
