//! Client facade assembling the SDK
//!
//! [`Brikk`] resolves configuration once, constructs exactly one
//! dispatcher, and wires every resource façade to it. The facade is
//! stateless beyond these references; there is no teardown because no
//! persistent connections are held.

use std::sync::Arc;

use crate::config::{ClientConfig, ConfigOverrides};
use crate::error::Result;
use crate::http::HttpClient;
use crate::resources::{Agents, Coordination, Economy, Health, Reputation};

/// Entry point for the Brikk platform SDK
///
/// # Example
///
/// ```rust,no_run
/// use brikk_core::Brikk;
///
/// # async fn example() -> brikk_core::Result<()> {
/// let brikk = Brikk::builder()
///     .base_url("https://api.example.com")
///     .api_key("key-1")
///     .signing_secret("shhh")
///     .build()?;
///
/// let health = brikk.health().check().await?;
/// println!("service status: {}", health.status);
/// # Ok(())
/// # }
/// ```
pub struct Brikk {
    http: Arc<HttpClient>,
    agents: Agents,
    coordination: Coordination,
    economy: Economy,
    reputation: Reputation,
    health: Health,
}

impl Brikk {
    /// Create a builder for configuring a client
    pub fn builder() -> BrikkBuilder {
        BrikkBuilder::default()
    }

    /// Create a client from the environment alone
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client from a resolved configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Arc::new(HttpClient::new(config)?);
        Ok(Self {
            agents: Agents::new(Arc::clone(&http)),
            coordination: Coordination::new(Arc::clone(&http)),
            economy: Economy::new(Arc::clone(&http)),
            reputation: Reputation::new(Arc::clone(&http)),
            health: Health::new(Arc::clone(&http)),
            http,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Agent registry operations
    pub fn agents(&self) -> &Agents {
        &self.agents
    }

    /// Coordination message delivery
    pub fn coordination(&self) -> &Coordination {
        &self.coordination
    }

    /// Economy transactions and balances
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    /// Reputation scores and ratings
    pub fn reputation(&self) -> &Reputation {
        &self.reputation
    }

    /// Service health checks
    pub fn health(&self) -> &Health {
        &self.health
    }
}

/// Builder for [`Brikk`]
///
/// Unset fields fall back to the `BRIKK_*` environment variables and then
/// to the defaults.
#[derive(Debug, Default)]
pub struct BrikkBuilder {
    overrides: ConfigOverrides,
}

impl BrikkBuilder {
    /// Set the API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.overrides.base_url = Some(base_url.into());
        self
    }

    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.overrides.api_key = Some(api_key.into());
        self
    }

    /// Set the shared signing secret
    pub fn signing_secret(mut self, signing_secret: impl Into<String>) -> Self {
        self.overrides.signing_secret = Some(signing_secret.into());
        self
    }

    /// Set the organization id
    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.overrides.org_id = Some(org_id.into());
        self
    }

    /// Set the per-call timeout in milliseconds
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.overrides.timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the maximum retry count
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.overrides.max_retries = Some(max_retries);
        self
    }

    /// Resolve the configuration and build the client
    pub fn build(self) -> Result<Brikk> {
        Brikk::new(ClientConfig::resolve(self.overrides)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_builder_explicit_values() {
        let brikk = Brikk::builder()
            .base_url("http://explicit.example.com")
            .api_key("key-1")
            .signing_secret("secret")
            .org_id("org-1")
            .timeout_ms(1_000)
            .max_retries(1)
            .build()
            .unwrap();

        let config = brikk.config();
        assert_eq!(config.base_url, "http://explicit.example.com");
        assert_eq!(config.api_key.as_deref(), Some("key-1"));
        assert_eq!(config.signing_secret.as_deref(), Some("secret"));
        assert_eq!(config.org_id.as_deref(), Some("org-1"));
        assert_eq!(config.timeout_ms, 1_000);
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = Brikk::builder()
            .base_url("http://localhost:8000")
            .timeout_ms(0)
            .build();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_facades_share_one_dispatcher() {
        let brikk = Brikk::builder()
            .base_url("http://localhost:8000")
            .timeout_ms(1_000)
            .max_retries(0)
            .build()
            .unwrap();
        // Facade assembly holds the dispatcher plus one clone per façade
        assert_eq!(Arc::strong_count(&brikk.http), 6);
    }
}
