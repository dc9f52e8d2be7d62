//! Coordination message envelope
//!
//! Every coordination send wraps its payload in a versioned envelope with
//! routing and TTL metadata. The envelope is built once per logical send
//! and is immutable afterwards: retries of the same send resend the same
//! `message_id`, which the receiving service uses for deduplication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Envelope schema version
pub const ENVELOPE_VERSION: &str = "1.0";
/// Default message time-to-live in milliseconds
pub const DEFAULT_TTL_MS: u64 = 60_000;

/// Routing endpoint of a coordination message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub agent_id: String,
}

impl Participant {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
        }
    }
}

/// A coordination message as sent on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinationMessage {
    pub version: String,
    pub message_id: Uuid,
    pub ts: DateTime<Utc>,
    #[serde(rename = "type")]
    pub message_type: String,
    pub sender: Participant,
    pub recipient: Participant,
    pub payload: Value,
    pub ttl_ms: u64,
}

impl CoordinationMessage {
    /// Build a fresh envelope: new UUIDv4 message id, current timestamp,
    /// default TTL.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message_type: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            message_id: Uuid::new_v4(),
            ts: Utc::now(),
            message_type: message_type.into(),
            sender: Participant::new(sender),
            recipient: Participant::new(recipient),
            payload,
            ttl_ms: DEFAULT_TTL_MS,
        }
    }

    /// Override the default TTL
    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }
}
