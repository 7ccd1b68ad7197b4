// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote tool gateway for the GoHighLevel MCP endpoint.
//!
//! A thin JSON-RPC 2.0 client: one `tools/call` POST per invocation,
//! per-request credentials, no retries, no timeouts (callers own both).

pub mod client;
pub mod types;

pub use client::GhlClient;
pub use types::{JsonRpcRequest, ToolCallParams};
