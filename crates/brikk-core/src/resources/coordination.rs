//! Coordination message delivery
//!
//! The one façade with construction logic: it fabricates the envelope
//! (fresh message id, current timestamp, default TTL) and routes it
//! through signed auth, since coordination messages are the one operation
//! requiring signature-based authenticity.

use std::sync::Arc;

use serde_json::Value;

use crate::envelope::CoordinationMessage;
use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};

/// Façade for coordination message delivery
pub struct Coordination {
    http: Arc<HttpClient>,
}

impl Coordination {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Send a coordination message.
    ///
    /// A fresh envelope is built per call; if the dispatcher retries the
    /// underlying request, every resend carries the same envelope (same
    /// `message_id`), and the service deduplicates by message id.
    pub async fn send(
        &self,
        sender: &str,
        recipient: &str,
        message_type: &str,
        payload: Value,
        ttl_ms: Option<u64>,
    ) -> Result<Value> {
        let mut envelope = CoordinationMessage::new(sender, recipient, message_type, payload);
        if let Some(ttl) = ttl_ms {
            envelope = envelope.with_ttl_ms(ttl);
        }
        self.send_envelope(&envelope).await
    }

    /// Send a pre-built envelope
    pub async fn send_envelope(&self, envelope: &CoordinationMessage) -> Result<Value> {
        let descriptor = RequestDescriptor::post("/api/v1/coordination")
            .with_body(serde_json::to_value(envelope)?)
            .signed();
        self.http.request(descriptor).await
    }
}
