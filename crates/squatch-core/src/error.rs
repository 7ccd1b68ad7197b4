// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Squatch CRM assistant.

use thiserror::Error;

/// The primary error type used across all Squatch crates.
///
/// The HTTP layer maps `Validation` to 400 and everything that escapes the
/// orchestrator to 500. `Gateway` and `Provider` failures are normally caught
/// inside the orchestrator and folded into a still-successful chat response.
#[derive(Debug, Error)]
pub enum SquatchError {
    /// Request validation errors (empty message, missing or malformed credentials).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote tool gateway errors (auth, network, non-2xx from the CRM endpoint).
    ///
    /// `status` carries the remote HTTP status when one was received; network
    /// failures before a response leave it `None`.
    #[error("gateway error: {message}")]
    Gateway {
        status: Option<u16>,
        message: String,
    },

    /// LLM provider errors (API failure, quota exceeded, unparseable response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SquatchError {
    /// Remote status code for gateway errors, if one was received.
    pub fn gateway_status(&self) -> Option<u16> {
        match self {
            SquatchError::Gateway { status, .. } => *status,
            _ => None,
        }
    }
}
