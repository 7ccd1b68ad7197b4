// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Squatch CRM assistant.
//!
//! TOML configuration with strict parsing (`deny_unknown_fields`), XDG file
//! hierarchy lookup, and environment variable overrides via the `SQUATCH_`
//! prefix.
//!
//! # Usage
//!
//! ```no_run
//! let config = squatch_config::load_and_validate().expect("config errors");
//! println!("binding {}:{}", config.server.host, config.server.port);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::SquatchConfig;

use squatch_core::SquatchError;

/// Load configuration from the XDG hierarchy and validate it.
pub fn load_and_validate() -> Result<SquatchConfig, SquatchError> {
    let config = loader::load_config().map_err(|e| SquatchError::Config(e.to_string()))?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<SquatchConfig, SquatchError> {
    let config =
        loader::load_config_from_str(toml_content).map_err(|e| SquatchError::Config(e.to_string()))?;
    validation::validate_config(&config)?;
    Ok(config)
}
