//! Agent client abstraction
//!
//! Backend-agnostic transport to the external reasoning service. The
//! service is an opaque collaborator: requests go out as
//! `{user_id, agent_id, session_id, message}` and come back as
//! `{message}`, where the response text *contains* — but need not consist
//! solely of — a JSON payload. Extraction lives in [`parsing`].
//!
//! - `AgentBackend` trait: the transport interface
//! - `AgentClient` enum: concrete wrapper providing Clone + compile-time
//!   dispatch
//! - Backend implementations: `LyzrBackend` (HTTP), `MockBackend`
//!   (scripted, for tests and development)

pub mod lyzr;
pub mod mock;
pub mod parsing;
pub mod types;

pub use lyzr::LyzrBackend;
pub use mock::{MockBackend, MockReply};
pub use types::*;

use async_trait::async_trait;

use crate::config::AgentConfig;
use crate::error::Result;

/// Transport to the external reasoning service.
///
/// `agent_id` selects which behavior the service performs. The returned
/// text is untrusted; callers must treat it as potentially non-JSON.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Send a serialized payload tagged with an agent identity and await
    /// the raw response text.
    async fn send(&self, agent_id: &str, message: &str) -> Result<String>;

    /// Host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete agent client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AgentClient {
    /// Hosted reasoning service (HTTP API)
    Lyzr(LyzrBackend),
    /// Scripted backend for testing
    Mock(MockBackend),
}

impl AgentClient {
    /// Create an HTTP client from environment variables.
    ///
    /// Returns `None` when `TALLY_AGENT_API_KEY` is not set; the ledger
    /// stays fully usable without enrichment in that case.
    pub fn from_env() -> Option<Self> {
        AgentConfig::from_env().map(|config| Self::lyzr(&config))
    }

    pub fn lyzr(config: &AgentConfig) -> Self {
        AgentClient::Lyzr(LyzrBackend::new(config))
    }

    pub fn mock(backend: MockBackend) -> Self {
        AgentClient::Mock(backend)
    }
}

#[async_trait]
impl AgentBackend for AgentClient {
    async fn send(&self, agent_id: &str, message: &str) -> Result<String> {
        match self {
            AgentClient::Lyzr(b) => b.send(agent_id, message).await,
            AgentClient::Mock(b) => b.send(agent_id, message).await,
        }
    }

    fn host(&self) -> &str {
        match self {
            AgentClient::Lyzr(b) => b.host(),
            AgentClient::Mock(b) => b.host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_delegates_to_mock() {
        let client = AgentClient::mock(MockBackend::with_script([MockReply::text("hello")]));
        assert_eq!(client.host(), "mock://agent");
        assert_eq!(client.send("a", "m").await.unwrap(), "hello");
    }
}
