//! Test utilities for tally-core
//!
//! Provides a mock agent server speaking the inference wire contract, for
//! integration tests and development without the hosted service. Replies
//! wrap their JSON in prose the way the real service can, so tests also
//! exercise the lenient extraction path.

use axum::{extract::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::sync::oneshot;

use crate::config::DEFAULT_INSIGHTS_AGENT;

/// Mock agent server for testing and development
pub struct MockAgentServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockAgentServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new().route("/v3/inference/chat/", post(handle_inference));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockAgentServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Inference request per the wire contract. All four fields are required;
/// a malformed request fails deserialization and the call errors out,
/// which is itself a useful contract check.
#[derive(Debug, Deserialize)]
struct InferenceRequest {
    #[allow(dead_code)]
    user_id: String,
    agent_id: String,
    #[allow(dead_code)]
    session_id: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct InferenceResponse {
    message: String,
}

async fn handle_inference(Json(request): Json<InferenceRequest>) -> Json<InferenceResponse> {
    let message = if request.agent_id == DEFAULT_INSIGHTS_AGENT
        || request.message.trim_start().starts_with('[')
    {
        insights_reply(&request.message)
    } else {
        categorization_reply(&request.message)
    };

    Json(InferenceResponse { message })
}

/// Build an insights report over the posted transaction array.
fn insights_reply(message: &str) -> String {
    let transactions: Vec<serde_json::Value> =
        serde_json::from_str(message).unwrap_or_default();

    let mut income = 0.0;
    let mut expenses = 0.0;
    for tx in &transactions {
        let amount = tx["amount"].as_f64().unwrap_or(0.0);
        if tx["type"] == "income" {
            income += amount;
        } else {
            expenses += amount;
        }
    }
    let balance = income - expenses;
    let savings_rate = if income > 0.0 { balance / income * 100.0 } else { 0.0 };

    let report = serde_json::json!({
        "insights_report": {
            "summary": {
                "total_income": income,
                "total_expenses": expenses,
                "balance": balance,
                "savings_rate": savings_rate,
                "top_spending_categories": [],
                "monthly_trend": []
            },
            "insights": ["Your ledger was analyzed by the mock agent."],
            "recommendations": ["Keep adding transactions."],
            "confidence_score": 0.75
        },
        "metadata": {
            "analysis_timestamp": "2024-01-15T00:00:00Z",
            "data_period": "mock",
            "transaction_count": transactions.len()
        }
    });

    format!("Here is your financial analysis:\n{}\nHope this helps!", report)
}

/// Suggest a category from keywords in the posted description.
fn categorization_reply(message: &str) -> String {
    let payload: serde_json::Value = serde_json::from_str(message).unwrap_or_default();
    let description = payload["description"].as_str().unwrap_or("").to_lowercase();

    let category = if description.contains("coffee") || description.contains("lunch") {
        "Food & Dining"
    } else if description.contains("rent") || description.contains("electric") {
        "Bills & Utilities"
    } else if description.contains("uber") || description.contains("gas") {
        "Transportation"
    } else if description.contains("salary") || description.contains("paycheck") {
        "Salary"
    } else {
        "Other"
    };

    let reply = serde_json::json!({
        "categorization": {
            "primary_category": category,
            "confidence_score": 0.9,
            "alternative_categories": ["Other"],
            "reasoning": format!("Keyword match on \"{}\"", description)
        },
        "metadata": {
            "processing_time": "0.1s",
            "patterns_matched": [],
            "version": "mock"
        }
    });

    format!("Sure — here is the categorization:\n{}", reply)
}
