//! Tally CLI - interactive personal finance ledger session
//!
//! All state lives in memory for the lifetime of the session. Example:
//!
//!   tally> add --amount 4.50 --category "Food & Dining" --description "Morning coffee"
//!   tally> suggest --description "Monthly rent" --amount 1200
//!   tally> summary --days 30
//!   tally> insights --refresh
//!
//! Set TALLY_AGENT_API_KEY to enable the hosted reasoning service; without
//! it the ledger still works, enrichment just resolves to nothing.

mod cli;
mod commands;

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, SessionLine};
use tally_core::{AgentClient, AgentConfig, LedgerController, MockBackend};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let (agent, config) = match AgentConfig::from_env() {
        Some(config) => {
            tracing::info!(host = %config.base_url, "using hosted reasoning service");
            (AgentClient::lyzr(&config), config)
        }
        None => {
            println!("TALLY_AGENT_API_KEY not set; agent enrichment is unavailable this session.");
            (AgentClient::mock(MockBackend::new()), AgentConfig::default())
        }
    };
    let controller = LedgerController::new(agent, config);

    println!("Tally — in-memory ledger session. Type 'help' for commands, 'quit' to exit.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("tally> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let args = cli::split_line(&line);
        if args.is_empty() {
            continue;
        }

        match SessionLine::try_parse_from(&args) {
            Ok(session) => {
                if !commands::dispatch(&controller, session.command).await {
                    break;
                }
            }
            // Clap renders its own usage/help output, including for the
            // bare "help" command.
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    Ok(())
}
