//! Agent service configuration
//!
//! The reasoning service exposes one inference endpoint; the `agent_id` in
//! each request selects which behavior it performs. Both agent identities
//! are configuration, not user-extensible state.

/// Default inference endpoint of the hosted reasoning service.
pub const DEFAULT_AGENT_URL: &str = "https://agent-prod.studio.lyzr.ai";

/// Agent identity that suggests a category for a transaction description.
pub const DEFAULT_CATEGORIZATION_AGENT: &str = "68e17dbb010a31eba9890b72";

/// Agent identity that produces the narrative insights report.
pub const DEFAULT_INSIGHTS_AGENT: &str = "68e17dae3637bc8ddc9fff92";

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub base_url: String,
    pub api_key: String,
    pub categorization_agent_id: String,
    pub insights_agent_id: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AGENT_URL.to_string(),
            api_key: String::new(),
            categorization_agent_id: DEFAULT_CATEGORIZATION_AGENT.to_string(),
            insights_agent_id: DEFAULT_INSIGHTS_AGENT.to_string(),
        }
    }
}

impl AgentConfig {
    /// Config for the hosted service with the default agent identities.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Create from environment variables.
    ///
    /// `TALLY_AGENT_API_KEY` is required; `TALLY_AGENT_URL`,
    /// `TALLY_AGENT_CATEGORIZATION` and `TALLY_AGENT_INSIGHTS` override the
    /// defaults. Returns `None` when no API key is set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("TALLY_AGENT_API_KEY").ok()?;
        let defaults = Self::default();

        Some(Self {
            base_url: std::env::var("TALLY_AGENT_URL").unwrap_or(defaults.base_url),
            api_key,
            categorization_agent_id: std::env::var("TALLY_AGENT_CATEGORIZATION")
                .unwrap_or(defaults.categorization_agent_id),
            insights_agent_id: std::env::var("TALLY_AGENT_INSIGHTS")
                .unwrap_or(defaults.insights_agent_id),
        })
    }
}
