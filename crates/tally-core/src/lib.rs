//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance ledger:
//! - In-memory transaction store with snapshot reads
//! - Pure filtering and aggregation over snapshots (exact decimal sums)
//! - Pluggable agent backends for the external reasoning service
//! - Lenient extraction of JSON payloads from agent replies
//! - Enrichment orchestration with degrade-to-none failure handling
//!
//! All state is process-scoped; nothing is persisted across sessions.

pub mod agent;
pub mod aggregate;
pub mod config;
pub mod controller;
pub mod enrichment;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;

/// Test utilities including the mock agent server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use agent::{
    AgentBackend, AgentClient, CategorizationData, CategorizationResult, InsightsData,
    InsightsReport, LyzrBackend, MockBackend, MockReply, ReportMetadata, ReportSummary,
};
pub use config::AgentConfig;
pub use controller::LedgerController;
pub use enrichment::EnrichmentOrchestrator;
pub use error::{Error, Result};
pub use models::{
    CategorySummary, DateRange, FilterCriteria, MonthlyTrendPoint, NewTransaction, Summary,
    Transaction, TransactionKind, CATEGORIES,
};
pub use store::TransactionStore;
