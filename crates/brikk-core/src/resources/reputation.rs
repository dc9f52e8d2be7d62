//! Reputation score operations

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};

/// An agent's aggregate reputation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationScore {
    pub agent_id: String,
    pub score: f64,
    #[serde(default)]
    pub rating_count: Option<u64>,
}

/// A rating submitted for an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub agent_id: String,
    pub rater_id: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Rating {
    pub fn new(agent_id: impl Into<String>, rater_id: impl Into<String>, score: f64) -> Self {
        Self {
            agent_id: agent_id.into(),
            rater_id: rater_id.into(),
            score,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Façade for the reputation API
pub struct Reputation {
    http: Arc<HttpClient>,
}

impl Reputation {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetch an agent's reputation score
    pub async fn score(&self, agent_id: &str) -> Result<ReputationScore> {
        let descriptor = RequestDescriptor::get(format!("/api/v1/reputation/{}", agent_id));
        self.http.request_json(descriptor).await
    }

    /// Submit a rating for an agent
    pub async fn rate(&self, rating: &Rating) -> Result<Value> {
        let descriptor = RequestDescriptor::post("/api/v1/reputation")
            .with_body(serde_json::to_value(rating)?);
        self.http.request(descriptor).await
    }
}
