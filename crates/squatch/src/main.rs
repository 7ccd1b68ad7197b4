// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Squatch - a chat assistant for GoHighLevel CRM.
//!
//! This is the binary entry point.

use clap::{Parser, Subcommand};

mod render;
mod serve;
mod shell;

/// Squatch - a chat assistant for GoHighLevel CRM.
#[derive(Parser, Debug)]
#[command(name = "squatch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API server.
    Serve,
    /// Launch an interactive chat session.
    Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match squatch_config::load_and_validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("squatch: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Shell) => shell::run_shell(config).await,
        // A bare `squatch` runs the server.
        Some(Commands::Serve) | None => serve::run_serve(config).await,
    };

    if let Err(e) = result {
        eprintln!("squatch: {e}");
        std::process::exit(1);
    }
}
