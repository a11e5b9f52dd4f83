//! Ledger controller
//!
//! Composes the store, the pure query/statistics layers, and the
//! enrichment orchestrator. Reads are pull-model: every query works over a
//! snapshot taken at call time. A successful `add` additionally pushes a
//! fire-and-forget insights refresh; `update` and `remove` do not.

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;

use crate::agent::types::{CategorizationData, InsightsData};
use crate::agent::AgentClient;
use crate::aggregate;
use crate::config::AgentConfig;
use crate::enrichment::EnrichmentOrchestrator;
use crate::error::{Error, Result};
use crate::filter;
use crate::models::{
    CategorySummary, FilterCriteria, MonthlyTrendPoint, NewTransaction, Summary, Transaction,
    TransactionKind,
};
use crate::store::TransactionStore;

pub struct LedgerController {
    store: Arc<RwLock<TransactionStore>>,
    enricher: Arc<EnrichmentOrchestrator>,
}

impl LedgerController {
    pub fn new(agent: AgentClient, config: AgentConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(TransactionStore::new())),
            enricher: Arc::new(EnrichmentOrchestrator::new(agent, config)),
        }
    }

    /// Create the transaction and kick off an insights refresh.
    ///
    /// The refresh runs in the background over the ledger as of this
    /// mutation; it is not awaited and its failure never surfaces here.
    pub fn add(&self, new: NewTransaction) -> Result<Transaction> {
        validate_amount(new.amount)?;

        let (created, snapshot) = {
            let mut store = self.store.write().map_err(|_| store_lock_error())?;
            let created = store.add(new);
            (created, store.list())
        };

        let enricher = Arc::clone(&self.enricher);
        tokio::spawn(async move {
            enricher.request_insights(&snapshot).await;
        });

        Ok(created)
    }

    /// Replace every mutable field of the transaction with `id`.
    pub fn update(&self, id: &str, fields: NewTransaction) -> Result<Transaction> {
        validate_amount(fields.amount)?;
        self.store
            .write()
            .map_err(|_| store_lock_error())?
            .update(id, fields)
    }

    /// Remove a transaction. Removing an unknown id is a no-op.
    pub fn remove(&self, id: &str) -> Result<()> {
        self.store.write().map_err(|_| store_lock_error())?.remove(id);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Transaction> {
        self.store.read().ok()?.get(id).cloned()
    }

    /// Snapshot of the full ledger in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.store
            .read()
            .map(|store| store.list())
            .unwrap_or_default()
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Transaction> {
        filter::select(&self.transactions(), criteria)
    }

    pub fn summary(&self) -> Summary {
        aggregate::summary(&self.transactions())
    }

    pub fn summary_filtered(&self, criteria: &FilterCriteria) -> Summary {
        aggregate::summary(&self.filtered(criteria))
    }

    pub fn category_breakdown(&self) -> Vec<CategorySummary> {
        aggregate::category_breakdown(&self.transactions())
    }

    pub fn monthly_trend(&self) -> Vec<MonthlyTrendPoint> {
        aggregate::monthly_trend(&self.transactions())
    }

    /// Ask the categorization agent for a suggestion and retain the result.
    pub async fn suggest_category(
        &self,
        description: &str,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Option<CategorizationData> {
        self.enricher
            .request_categorization(description, amount, kind)
            .await
    }

    /// Regenerate insights synchronously.
    ///
    /// The add-triggered refresh is fire-and-forget; this is the explicit
    /// variant for callers that want to wait for the new report.
    pub async fn refresh_insights(&self) -> Option<InsightsData> {
        let snapshot = self.transactions();
        self.enricher.request_insights(&snapshot).await
    }

    pub fn insights(&self) -> Option<InsightsData> {
        self.enricher.insights()
    }

    pub fn categorization(&self) -> Option<CategorizationData> {
        self.enricher.categorization()
    }

    pub fn clear_categorization(&self) {
        self.enricher.clear_categorization()
    }
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidData(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

fn store_lock_error() -> Error {
    Error::InvalidData("ledger store lock poisoned".to_string())
}
