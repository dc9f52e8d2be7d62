//! Client configuration and environment resolution
//!
//! Configuration is resolved exactly once, at client construction, with
//! the precedence: explicit values > `BRIKK_*` environment variables >
//! hardcoded fallback. The dispatcher never reads the environment.

use crate::error::{Error, Result};

/// Environment variable carrying the API base URL
pub const ENV_BASE_URL: &str = "BRIKK_BASE_URL";
/// Environment variable carrying the API key
pub const ENV_API_KEY: &str = "BRIKK_API_KEY";
/// Environment variable carrying the shared signing secret
pub const ENV_SIGNING_SECRET: &str = "BRIKK_SIGNING_SECRET";
/// Environment variable carrying the organization id
pub const ENV_ORG_ID: &str = "BRIKK_ORG_ID";
/// Environment variable carrying the per-call timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "BRIKK_TIMEOUT_MS";
/// Environment variable carrying the maximum retry count
pub const ENV_MAX_RETRIES: &str = "BRIKK_MAX_RETRIES";

/// Fallback base URL when neither an explicit value nor the environment
/// provides one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default per-call timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default maximum number of retries after the initial attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Resolved, immutable client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the coordination API
    pub base_url: String,
    /// API key for bearer auth and the signed-mode key header
    pub api_key: Option<String>,
    /// Shared secret for HMAC request signing
    pub signing_secret: Option<String>,
    /// Organization the credentials belong to
    pub org_id: Option<String>,
    /// Per-call timeout in milliseconds
    pub timeout_ms: u64,
    /// Maximum retries after the initial attempt
    pub max_retries: u32,
}

/// Explicit configuration values taking precedence over the environment.
///
/// Every field is optional; unset fields fall through to the `BRIKK_*`
/// environment variables and then to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub signing_secret: Option<String>,
    pub org_id: Option<String>,
    pub timeout_ms: Option<u64>,
    pub max_retries: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            signing_secret: None,
            org_id: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ClientConfig {
    /// Resolve a configuration from explicit overrides, the environment,
    /// and the defaults, in that order of precedence.
    ///
    /// This is the only place the process environment is consulted.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let config = Self {
            base_url: overrides
                .base_url
                .or_else(|| env_var(ENV_BASE_URL))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: overrides.api_key.or_else(|| env_var(ENV_API_KEY)),
            signing_secret: overrides
                .signing_secret
                .or_else(|| env_var(ENV_SIGNING_SECRET)),
            org_id: overrides.org_id.or_else(|| env_var(ENV_ORG_ID)),
            timeout_ms: match overrides.timeout_ms {
                Some(ms) => ms,
                None => env_parsed(ENV_TIMEOUT_MS)?.unwrap_or(DEFAULT_TIMEOUT_MS),
            },
            max_retries: match overrides.max_retries {
                Some(n) => n,
                None => env_parsed(ENV_MAX_RETRIES)?.unwrap_or(DEFAULT_MAX_RETRIES),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve a configuration from the environment alone
    pub fn from_env() -> Result<Self> {
        Self::resolve(ConfigOverrides::default())
    }

    /// Validate the configuration invariants
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::config("timeout_ms must be greater than zero"));
        }
        Ok(())
    }
}

/// Read an environment variable, treating empty values as unset
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read and parse a numeric environment variable
fn env_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env_var(name) {
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            Error::config(format!("{} must be a non-negative integer, got {:?}", name, raw))
        }),
        None => Ok(None),
    }
}
