//! Economy transaction operations

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};

/// Request to move value between two agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_agent: String,
    pub to_agent: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl TransferRequest {
    pub fn new(from_agent: impl Into<String>, to_agent: impl Into<String>, amount: f64) -> Self {
        Self {
            from_agent: from_agent.into(),
            to_agent: to_agent.into(),
            amount,
            currency: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// A recorded transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub from_agent: String,
    pub to_agent: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// An agent's current balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub agent_id: String,
    pub balance: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransactionList {
    transactions: Vec<Transaction>,
}

/// Façade for the economy API
pub struct Economy {
    http: Arc<HttpClient>,
}

impl Economy {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Record a transfer between two agents
    pub async fn transfer(&self, request: &TransferRequest) -> Result<Transaction> {
        let descriptor = RequestDescriptor::post("/api/v1/economy/transactions")
            .with_body(serde_json::to_value(request)?);
        self.http.request_json(descriptor).await
    }

    /// Fetch an agent's balance
    pub async fn balance(&self, agent_id: &str) -> Result<Balance> {
        let descriptor =
            RequestDescriptor::get(format!("/api/v1/economy/balance/{}", agent_id));
        self.http.request_json(descriptor).await
    }

    /// List transactions involving an agent
    pub async fn transactions(&self, agent_id: &str) -> Result<Vec<Transaction>> {
        let descriptor = RequestDescriptor::get("/api/v1/economy/transactions")
            .with_query("agent_id", agent_id);
        let list: TransactionList = self.http.request_json(descriptor).await?;
        Ok(list.transactions)
    }
}
