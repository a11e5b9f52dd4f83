//! Session command implementations

use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;

use tally_core::{
    FilterCriteria, LedgerController, NewTransaction, Transaction, TransactionKind,
};

use crate::cli::SessionCommand;

/// Run one session command. Returns `false` when the session should end.
pub async fn dispatch(controller: &LedgerController, command: SessionCommand) -> bool {
    if matches!(command, SessionCommand::Quit) {
        return false;
    }
    if let Err(e) = run(controller, command).await {
        println!("  error: {}", e);
    }
    true
}

async fn run(controller: &LedgerController, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Add {
            amount,
            category,
            description,
            date,
            kind,
        } => {
            let tx = controller.add(NewTransaction {
                amount,
                category,
                description,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                kind,
            })?;
            println!("  Added {}", short(&tx));
        }

        SessionCommand::Update {
            id,
            amount,
            category,
            description,
            date,
            kind,
        } => {
            let tx = controller.update(
                &id,
                NewTransaction {
                    amount,
                    category,
                    description,
                    date: date.unwrap_or_else(|| Local::now().date_naive()),
                    kind,
                },
            )?;
            println!("  Updated {}", short(&tx));
        }

        SessionCommand::Delete { id } => {
            controller.remove(&id)?;
            println!("  Deleted {}", id);
        }

        SessionCommand::List { category, kind, days } => {
            let transactions = controller.filtered(&FilterCriteria {
                category,
                kind,
                date_range: days,
            });
            if transactions.is_empty() {
                println!("  No transactions match.");
            }
            for tx in &transactions {
                println!(
                    "  {}  {}  {:>12}  {:<20}  {}",
                    tx.id,
                    tx.date,
                    signed(tx),
                    tx.category,
                    tx.description
                );
            }
            println!("  ({} transactions)", transactions.len());
        }

        SessionCommand::Summary { category, kind, days } => {
            let summary = controller.summary_filtered(&FilterCriteria {
                category,
                kind,
                date_range: days,
            });
            println!("  Income:   {}", money(summary.income));
            println!("  Expenses: {}", money(summary.expenses));
            println!("  Balance:  {}", money(summary.balance));
        }

        SessionCommand::Breakdown => {
            let breakdown = controller.category_breakdown();
            if breakdown.is_empty() {
                println!("  No expenses recorded.");
            }
            for entry in breakdown {
                println!("  {:<20} {}", entry.category, money(entry.amount));
            }
        }

        SessionCommand::Trend => {
            let trend = controller.monthly_trend();
            if trend.is_empty() {
                println!("  No transactions recorded.");
            }
            for point in trend {
                println!(
                    "  {:<4} income {:>12}   expenses {:>12}",
                    point.month,
                    money(point.income),
                    money(point.expenses)
                );
            }
        }

        SessionCommand::Suggest {
            description,
            amount,
            kind,
        } => match controller.suggest_category(&description, amount, kind).await {
            Some(data) => {
                let c = &data.categorization;
                println!(
                    "  Suggested: {} ({:.0}% confidence)",
                    c.primary_category,
                    c.confidence_score * 100.0
                );
                if !c.reasoning.is_empty() {
                    println!("  Reasoning: {}", c.reasoning);
                }
                if !c.alternative_categories.is_empty() {
                    println!("  Alternatives: {}", c.alternative_categories.join(", "));
                }
            }
            None => println!("  No suggestion available (agent unreachable or unparsable)."),
        },

        SessionCommand::Insights { refresh } => {
            if refresh {
                println!("  Refreshing insights...");
                controller.refresh_insights().await;
            }
            match controller.insights() {
                Some(data) => print_insights(&data),
                None => println!("  No insights yet. Add transactions, or run insights --refresh."),
            }
        }

        SessionCommand::Quit => {}
    }

    Ok(())
}

fn print_insights(data: &tally_core::InsightsData) {
    let report = &data.insights_report;
    let s = &report.summary;

    println!("  ─── Insights ────────────────────────────────");
    println!(
        "  Income ${:.2}   Expenses ${:.2}   Balance ${:.2}   Savings rate {:.1}%",
        s.total_income, s.total_expenses, s.balance, s.savings_rate
    );
    if !s.top_spending_categories.is_empty() {
        println!("  Top categories:");
        for top in &s.top_spending_categories {
            println!(
                "    {} — ${:.2} ({:.1}%)",
                top.category, top.amount, top.percentage
            );
        }
    }
    if !report.insights.is_empty() {
        println!("  Key insights:");
        for line in &report.insights {
            println!("    • {}", line);
        }
    }
    if !report.recommendations.is_empty() {
        println!("  Recommendations:");
        for line in &report.recommendations {
            println!("    • {}", line);
        }
    }
    println!(
        "  Confidence {:.0}%   ({} transactions, period: {})",
        report.confidence_score * 100.0,
        data.metadata.transaction_count,
        if data.metadata.data_period.is_empty() {
            "n/a"
        } else {
            &data.metadata.data_period
        }
    );
}

/// Rounding to currency precision happens here, at presentation, and
/// nowhere earlier.
fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

fn signed(tx: &Transaction) -> String {
    match tx.kind {
        TransactionKind::Income => format!("+{:.2}", tx.amount.round_dp(2)),
        TransactionKind::Expense => format!("-{:.2}", tx.amount.round_dp(2)),
    }
}

fn short(tx: &Transaction) -> String {
    format!(
        "{} — {} {} {} ({})",
        tx.id,
        tx.date,
        signed(tx),
        tx.category,
        tx.kind
    )
}
