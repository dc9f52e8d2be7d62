//! Typed resource façades over the shared dispatcher
//!
//! Each façade holds a handle to the one [`HttpClient`](crate::http::HttpClient)
//! and exposes a narrow, typed contract for one API area. The
//! façades marshal and unmarshal; every systems concern (auth, timeout,
//! retry, classification) lives in the dispatcher, and dispatcher errors
//! propagate unchanged.

pub mod agents;
pub mod coordination;
pub mod economy;
pub mod health;
pub mod reputation;

pub use agents::{Agent, AgentRegistration, Agents};
pub use coordination::Coordination;
pub use economy::{Balance, Economy, Transaction, TransferRequest};
pub use health::{Health, HealthStatus};
pub use reputation::{Rating, Reputation, ReputationScore};
