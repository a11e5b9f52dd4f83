//! HTTP backend for the hosted reasoning service
//!
//! One POST endpoint; the `agent_id` field selects the behavior performed
//! on the service side. The response text is returned untouched — callers
//! run the lenient extraction in [`super::parsing`] over it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::AgentConfig;
use crate::error::{Error, Result};

use super::AgentBackend;

#[derive(Clone)]
pub struct LyzrBackend {
    http_client: Client,
    base_url: String,
    api_key: String,
}

/// Request to the inference endpoint.
///
/// `message` carries the JSON-serialized domain payload. `user_id` and
/// `session_id` are client-generated opaque identifiers the service
/// assigns no meaning to; a fresh pair goes out with every call.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    user_id: String,
    agent_id: &'a str,
    session_id: String,
    message: &'a str,
}

/// Response from the inference endpoint
#[derive(Debug, Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    message: String,
}

impl LyzrBackend {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            http_client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl AgentBackend for LyzrBackend {
    async fn send(&self, agent_id: &str, message: &str) -> Result<String> {
        let request = InferenceRequest {
            user_id: format!("user_{}@tally.local", Uuid::new_v4().simple()),
            agent_id,
            session_id: format!("session_{}", Uuid::new_v4().simple()),
            message,
        };

        let response = self
            .http_client
            .post(format!("{}/v3/inference/chat/", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Http(response.error_for_status().unwrap_err()));
        }

        let body: InferenceResponse = response.json().await?;
        debug!(agent = agent_id, "agent response: {}", body.message);

        Ok(body.message)
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}
