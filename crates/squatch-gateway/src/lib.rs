// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the chat assistant.
//!
//! Exposes the REST API (chat, connection probes, health), optional static
//! API-key auth, and a fixed-window per-client rate limiter. Permissive CORS
//! so a separately hosted front end can call the API directly.

pub mod auth;
pub mod handlers;
pub mod ratelimit;
pub mod server;

pub use auth::ApiKeyConfig;
pub use ratelimit::FixedWindowLimiter;
pub use server::{build_router, start_server, GatewayState, ServerConfig};
