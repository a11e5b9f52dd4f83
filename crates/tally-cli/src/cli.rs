//! CLI argument definitions using clap
//!
//! The binary takes only session-level flags; ledger commands are typed
//! one per line at the interactive prompt and parsed with
//! [`SessionLine::try_parse_from`] after quote-aware tokenization.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tally_core::{DateRange, TransactionKind};

/// Tally - in-memory personal finance ledger with agent insights
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance ledger with agent-powered enrichment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of the interactive session
#[derive(Parser)]
#[command(name = "tally", no_binary_name = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Add a transaction (kicks off an insights refresh)
    Add {
        #[arg(long)]
        amount: Decimal,

        #[arg(long)]
        category: String,

        #[arg(long)]
        description: String,

        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// income or expense
        #[arg(long = "type", value_name = "TYPE", default_value = "expense")]
        kind: TransactionKind,
    },

    /// Replace every field of an existing transaction
    Update {
        id: String,

        #[arg(long)]
        amount: Decimal,

        #[arg(long)]
        category: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long = "type", value_name = "TYPE", default_value = "expense")]
        kind: TransactionKind,
    },

    /// Delete a transaction (unknown ids are ignored)
    Delete { id: String },

    /// List transactions, newest first
    List {
        #[arg(long)]
        category: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<TransactionKind>,

        /// Trailing window in days, or "all"
        #[arg(long, default_value = "all")]
        days: DateRange,
    },

    /// Income, expense and balance totals
    Summary {
        #[arg(long)]
        category: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<TransactionKind>,

        #[arg(long, default_value = "all")]
        days: DateRange,
    },

    /// Expense totals per category
    Breakdown,

    /// Monthly income/expense trend
    Trend,

    /// Ask the agent to suggest a category for a description
    Suggest {
        #[arg(long)]
        description: String,

        #[arg(long, default_value = "0")]
        amount: Decimal,

        #[arg(long = "type", value_name = "TYPE", default_value = "expense")]
        kind: TransactionKind,
    },

    /// Show the latest insights report
    Insights {
        /// Regenerate the report before showing it
        #[arg(long)]
        refresh: bool,
    },

    /// Exit the session
    Quit,
}

/// Split a session line into arguments, honoring double quotes.
pub fn split_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        args.push(current);
    }

    args
}
