// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `squatch shell` command implementation.
//!
//! An interactive chat session against the same orchestrator the HTTP API
//! uses. Credentials are held in memory for the lifetime of the session and
//! entered with `/connect`; nothing is persisted to disk.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::json;

use squatch_config::SquatchConfig;
use squatch_core::{Credentials, GhlTool, SquatchError};

use crate::render::render_data;
use crate::serve::{build_components, Components};

/// Runs the `squatch shell` interactive session.
pub async fn run_shell(config: SquatchConfig) -> Result<(), SquatchError> {
    let components = build_components(&config)?;

    let mut rl = DefaultEditor::new()
        .map_err(|e| SquatchError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "squatch shell".bold().green());
    println!(
        "Connect with {} first, then chat. {} to exit.\n",
        "/connect <token> <locationId>".yellow(),
        "/quit".yellow()
    );

    let mut credentials: Option<Credentials> = None;

    let prompt = format!("{}> ", "squatch".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(rest) = trimmed.strip_prefix("/connect") {
                    credentials = connect(&components, rest).await;
                    continue;
                }

                let Some(ref creds) = credentials else {
                    println!(
                        "Not connected. Use {} first.",
                        "/connect <token> <locationId>".yellow()
                    );
                    continue;
                };

                match components.orchestrator.handle(trimmed, creds).await {
                    Ok(outcome) => {
                        println!("{}", outcome.response);
                        if let Some(ref data) = outcome.ghl_data {
                            println!("{}", render_data(data));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}: {e}", "error".red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Handle `/connect <token> <locationId>`: validate, probe, store on success.
async fn connect(components: &Components, args: &str) -> Option<Credentials> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [token, location_id] = parts.as_slice() else {
        println!("usage: {}", "/connect <token> <locationId>".yellow());
        return None;
    };

    let creds = Credentials::new(*token, *location_id);
    if let Err(e) = creds.validate() {
        eprintln!("{}: {e}", "error".red());
        return None;
    }

    match components
        .ghl
        .call(GhlTool::ContactsGetContacts, json!({"limit": 1}), &creds)
        .await
    {
        Ok(_) => {
            println!("{}", "connected to GoHighLevel".green());
            Some(creds)
        }
        Err(e) => {
            eprintln!("{}: {e}", "connection failed".red());
            None
        }
    }
}
