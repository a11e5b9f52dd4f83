//! Pure statistics over transaction sequences
//!
//! All three computations accept an arbitrary sequence; the caller decides
//! whether to aggregate the full ledger or a filtered subset. Sums are
//! exact `Decimal` arithmetic throughout. Rounding to currency precision
//! is a presentation concern and must never happen before aggregation.

use rust_decimal::Decimal;

use crate::models::{
    CategorySummary, MonthlyTrendPoint, Summary, Transaction, TransactionKind, CATEGORIES,
};

/// Income, expense and balance totals.
pub fn summary(transactions: &[Transaction]) -> Summary {
    let income: Decimal = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: Decimal = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();

    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Expense totals per canonical category.
///
/// Entries come out in canonical domain order, not by magnitude, and a
/// category whose total is exactly zero is omitted. Transactions carrying
/// an out-of-domain label match no bucket.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySummary> {
    CATEGORIES
        .iter()
        .filter_map(|&category| {
            let amount: Decimal = transactions
                .iter()
                .filter(|t| t.kind == TransactionKind::Expense && t.category == category)
                .map(|t| t.amount)
                .sum();
            (!amount.is_zero()).then(|| CategorySummary {
                category: category.to_string(),
                amount,
            })
        })
        .collect()
}

/// Income and expense totals grouped by short month label.
///
/// The label carries no year: "Jan 2023" and "Jan 2024" land in the same
/// group. That is a known limitation of the grouping key, kept for output
/// compatibility. Groups appear in first-encounter order while scanning
/// the input, not chronological order.
pub fn monthly_trend(transactions: &[Transaction]) -> Vec<MonthlyTrendPoint> {
    let mut points: Vec<MonthlyTrendPoint> = Vec::new();

    for t in transactions {
        let label = t.date.format("%b").to_string();
        let idx = match points.iter().position(|p| p.month == label) {
            Some(i) => i,
            None => {
                points.push(MonthlyTrendPoint {
                    month: label,
                    income: Decimal::ZERO,
                    expenses: Decimal::ZERO,
                });
                points.len() - 1
            }
        };
        match t.kind {
            TransactionKind::Income => points[idx].income += t.amount,
            TransactionKind::Expense => points[idx].expenses += t.amount,
        }
    }

    points
}
