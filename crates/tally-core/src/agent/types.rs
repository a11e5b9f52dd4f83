//! Agent response types
//!
//! Wire shapes produced by the reasoning service. Snake_case field names
//! match the service contract; numeric values are agent-produced display
//! data, validated structurally and never re-aggregated.

use serde::{Deserialize, Serialize};

/// Categorization envelope: `{ categorization: {...}, metadata: {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizationData {
    pub categorization: CategorizationResult,
    /// Service-side processing details (processing time, matched patterns,
    /// version). Carried for display, not interpreted.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A category suggestion for one transaction description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizationResult {
    /// Suggested label; expected to come from the canonical domain but
    /// accepted as-is when it does not
    pub primary_category: String,
    /// Confidence in [0, 1] (documented range, not enforced)
    pub confidence_score: f64,
    #[serde(default)]
    pub alternative_categories: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// Insights envelope: `{ insights_report: {...}, metadata: {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsData {
    pub insights_report: InsightsReport,
    #[serde(default)]
    pub metadata: ReportMetadata,
}

/// Narrative analysis over the whole ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsReport {
    pub summary: ReportSummary,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence_score: f64,
}

/// Numeric summary block of an insights report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub savings_rate: f64,
    #[serde(default)]
    pub top_spending_categories: Vec<TopCategory>,
    #[serde(default)]
    pub monthly_trend: Vec<ReportTrendPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopCategory {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTrendPoint {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

/// Report provenance; validated leniently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(default)]
    pub analysis_timestamp: String,
    #[serde(default)]
    pub data_period: String,
    #[serde(default)]
    pub transaction_count: u64,
}
