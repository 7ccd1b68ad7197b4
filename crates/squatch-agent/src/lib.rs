// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat orchestration: intent resolution, tool dispatch, summarization.

pub mod orchestrator;
pub mod prompts;

pub use orchestrator::ChatOrchestrator;
