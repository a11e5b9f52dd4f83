//! Asynchronous enrichment orchestration
//!
//! Two independent operations against the reasoning service: category
//! suggestion for a single description, and a narrative insights report
//! over the whole ledger. Transport and parse failures are caught here,
//! logged, and degrade to "no result" — they never surface to callers as
//! blocking errors, and a failed insights request never clears a
//! previously held report.
//!
//! There is deliberately no deduplication, debounce, or cancellation.
//! When two categorization requests are in flight, the last response to
//! resolve wins the slot, regardless of issue order.

use std::sync::RwLock;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::agent::parsing::{parse_categorization, parse_insights};
use crate::agent::types::{CategorizationData, InsightsData};
use crate::agent::{AgentBackend, AgentClient};
use crate::config::AgentConfig;
use crate::error::Result;
use crate::models::{Transaction, TransactionKind};

/// Payload sent to the categorization agent
#[derive(Debug, Serialize)]
struct CategorizationRequest<'a> {
    description: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    #[serde(rename = "type")]
    kind: TransactionKind,
}

pub struct EnrichmentOrchestrator {
    agent: AgentClient,
    config: AgentConfig,
    categorization: RwLock<Option<CategorizationData>>,
    insights: RwLock<Option<InsightsData>>,
}

impl EnrichmentOrchestrator {
    pub fn new(agent: AgentClient, config: AgentConfig) -> Self {
        Self {
            agent,
            config,
            categorization: RwLock::new(None),
            insights: RwLock::new(None),
        }
    }

    /// Ask the categorization agent for a category suggestion.
    ///
    /// On success the full result is retained for display and also
    /// returned, so the caller can pre-fill a category field. Any failure
    /// resolves to `None` and leaves the retained result untouched.
    pub async fn request_categorization(
        &self,
        description: &str,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Option<CategorizationData> {
        let payload = CategorizationRequest {
            description,
            amount,
            kind,
        };
        let message = match serde_json::to_string(&payload) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "failed to encode categorization payload");
                return None;
            }
        };

        match self
            .call_agent(&self.config.categorization_agent_id, &message)
            .await
            .and_then(|raw| parse_categorization(&raw))
        {
            Ok(data) => {
                debug!(
                    category = %data.categorization.primary_category,
                    confidence = data.categorization.confidence_score,
                    "categorization resolved"
                );
                if let Ok(mut slot) = self.categorization.write() {
                    *slot = Some(data.clone());
                }
                Some(data)
            }
            Err(e) => {
                warn!(error = %e, "categorization request failed");
                None
            }
        }
    }

    /// Regenerate the insights report over the given ledger snapshot.
    ///
    /// The whole transaction list is the request payload. On success the
    /// held report is replaced wholesale; on failure it stays exactly as
    /// it was.
    pub async fn request_insights(&self, transactions: &[Transaction]) -> Option<InsightsData> {
        let message = match serde_json::to_string(transactions) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "failed to encode ledger payload");
                return None;
            }
        };

        match self
            .call_agent(&self.config.insights_agent_id, &message)
            .await
            .and_then(|raw| parse_insights(&raw))
        {
            Ok(data) => {
                debug!(
                    transactions = transactions.len(),
                    confidence = data.insights_report.confidence_score,
                    "insights report refreshed"
                );
                if let Ok(mut slot) = self.insights.write() {
                    *slot = Some(data.clone());
                }
                Some(data)
            }
            Err(e) => {
                warn!(error = %e, "insights request failed; keeping previous report");
                None
            }
        }
    }

    async fn call_agent(&self, agent_id: &str, message: &str) -> Result<String> {
        self.agent.send(agent_id, message).await
    }

    /// Latest successfully resolved categorization, if any.
    pub fn categorization(&self) -> Option<CategorizationData> {
        self.categorization.read().ok().and_then(|slot| slot.clone())
    }

    /// Latest successfully generated insights report, if any.
    pub fn insights(&self) -> Option<InsightsData> {
        self.insights.read().ok().and_then(|slot| slot.clone())
    }

    /// Drop the retained categorization (form-reset counterpart).
    pub fn clear_categorization(&self) {
        if let Ok(mut slot) = self.categorization.write() {
            *slot = None;
        }
    }
}
