//! Domain models for Tally

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed category domain.
///
/// Used for form selection in frontends and for `category_breakdown`
/// grouping. The list is a configuration constant, not user-extensible;
/// enrichment responses may still carry labels outside it and those are
/// stored as-is.
pub const CATEGORIES: [&str; 15] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Personal Care",
    "Home & Garden",
    "Travel",
    "Gifts & Donations",
    "Investment",
    "Salary",
    "Freelance",
    "Other",
];

/// Direction of a transaction.
///
/// The sign of `amount` is never stored; direction always comes from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique id, assigned at creation and never reused
    pub id: String,
    /// Always positive; serialized as a JSON number on the agent wire
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    /// Calendar date, no time component
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Transaction fields without an id.
///
/// Used both by `add` (the store assigns the id) and by `update` (every
/// mutable field is replaced wholesale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Date constraint for queries: a trailing window in days, or no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Days(u32),
    #[default]
    All,
}

impl std::str::FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            other => other
                .parse::<u32>()
                .map(Self::Days)
                .map_err(|_| format!("Invalid date range: {}", s)),
        }
    }
}

/// Query criteria. An unset field places no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    pub date_range: DateRange,
}

/// Income/expense totals over a transaction sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Per-category expense total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Per-month income and expense totals, keyed by short month label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub month: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(TransactionKind::from_str("income").unwrap(), TransactionKind::Income);
        assert_eq!(TransactionKind::from_str("EXPENSE").unwrap(), TransactionKind::Expense);
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
        assert!(TransactionKind::from_str("transfer").is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TransactionKind::Income).unwrap(), "\"income\"");
    }

    #[test]
    fn test_date_range_parsing() {
        assert_eq!(DateRange::from_str("30").unwrap(), DateRange::Days(30));
        assert_eq!(DateRange::from_str("all").unwrap(), DateRange::All);
        assert!(DateRange::from_str("-3").is_err());
        assert!(DateRange::from_str("monthly").is_err());
    }

    #[test]
    fn test_transaction_wire_shape() {
        let tx = Transaction {
            id: "abc123".to_string(),
            amount: rust_decimal_macros::dec!(15.49),
            category: "Entertainment".to_string(),
            description: "Streaming".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            kind: TransactionKind::Expense,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["amount"], 15.49);
        assert_eq!(value["date"], "2024-01-05");
    }

    #[test]
    fn test_category_domain_size() {
        assert_eq!(CATEGORIES.len(), 15);
        assert!(CATEGORIES.contains(&"Food & Dining"));
        assert!(CATEGORIES.contains(&"Other"));
    }
}
