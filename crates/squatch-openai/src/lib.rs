// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI chat-completions provider for Squatch.

pub mod client;
pub mod types;

pub use client::OpenAiClient;
pub use types::ChatMessage;
