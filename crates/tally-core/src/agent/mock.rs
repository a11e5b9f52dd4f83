//! Scripted mock backend for tests and development
//!
//! Replies are consumed in the order calls are issued. Each reply can carry
//! its own latency, which lets tests force out-of-order resolution of
//! concurrent requests, and can be a transport failure instead of text.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::AgentBackend;

/// One scripted reply.
#[derive(Debug, Clone)]
pub struct MockReply {
    /// Simulated service latency before the reply resolves
    pub delay: Duration,
    /// Response text, or a transport failure message
    pub outcome: std::result::Result<String, String>,
}

impl MockReply {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(body.into()),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(reason.into()),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Mock agent backend.
///
/// An exhausted script behaves like an unreachable service. Every call is
/// recorded with its agent id and message so tests can assert on payloads.
#[derive(Clone, Default)]
pub struct MockBackend {
    script: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(replies.into_iter().collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a reply to the script.
    pub fn push(&self, reply: MockReply) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(reply);
        }
    }

    /// Every `(agent_id, message)` pair seen so far, in issue order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AgentBackend for MockBackend {
    async fn send(&self, agent_id: &str, message: &str) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((agent_id.to_string(), message.to_string()));
        }

        // The reply is claimed at issue time; the delay only shifts when it
        // resolves, which is what concurrent-resolution tests rely on.
        let reply = self
            .script
            .lock()
            .map_err(|_| Error::Transport("mock script lock poisoned".into()))?
            .pop_front()
            .ok_or_else(|| Error::Transport("mock script exhausted".into()))?;

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }

        reply.outcome.map_err(Error::Transport)
    }

    fn host(&self) -> &str {
        "mock://agent"
    }
}
