//! Brikk Core - Resilient HTTP client for the Brikk coordination platform
//!
//! This crate provides the client core underlying the Brikk SDK:
//! authenticating, signing, dispatching, retrying, and classifying
//! outcomes of calls against the coordination API, behind a small set of
//! typed resource façades.
//!
//! # Main Components
//!
//! - **Error Taxonomy**: closed set of failure kinds with the HTTP status
//!   mapping, using `thiserror`
//! - **Signer**: deterministic HMAC-SHA256 request signatures
//! - **Request Dispatcher**: URL building, auth headers, per-attempt
//!   timeouts, and capped exponential backoff over `reqwest`/`tokio`
//! - **Resource Façades**: agents, coordination, economy, reputation, and
//!   health, each a thin adapter over the shared dispatcher
//! - **Client Facade**: configuration resolution and façade assembly
//!
//! # Example
//!
//! ```rust,no_run
//! use brikk_core::{Brikk, Result};
//! use serde_json::json;
//!
//! async fn example() -> Result<()> {
//!     let brikk = Brikk::from_env()?;
//!
//!     let agents = brikk.agents().list().await?;
//!     println!("{} agents registered", agents.len());
//!
//!     brikk
//!         .coordination()
//!         .send("agent-a", "agent-b", "event", json!({"task": "ping"}), None)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod resources;

// Re-export main types for convenience
pub use client::{Brikk, BrikkBuilder};
pub use config::{ClientConfig, ConfigOverrides};
pub use envelope::{CoordinationMessage, Participant, DEFAULT_TTL_MS, ENVELOPE_VERSION};
pub use error::{Error, Result};
pub use http::{AuthContext, HttpClient, Method, RequestDescriptor, RetryPolicy, StatusCode};
pub use resources::{
    Agent, AgentRegistration, Agents, Balance, Coordination, Economy, Health, HealthStatus,
    Rating, Reputation, ReputationScore, Transaction, TransferRequest,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
