//! Agent registry operations

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};

/// Registration request for a new agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRegistration {
    pub agent_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
}

impl AgentRegistration {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            name: None,
            capabilities: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }
}

/// An agent as reported by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AgentList {
    agents: Vec<Agent>,
}

/// Façade for the agent registry
pub struct Agents {
    http: Arc<HttpClient>,
}

impl Agents {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Register an agent
    pub async fn register(&self, registration: &AgentRegistration) -> Result<Agent> {
        let descriptor = RequestDescriptor::post("/api/v1/agents")
            .with_body(serde_json::to_value(registration)?);
        self.http.request_json(descriptor).await
    }

    /// Fetch one agent by id
    pub async fn get(&self, agent_id: &str) -> Result<Agent> {
        let descriptor = RequestDescriptor::get(format!("/api/v1/agents/{}", agent_id));
        self.http.request_json(descriptor).await
    }

    /// List all registered agents
    pub async fn list(&self) -> Result<Vec<Agent>> {
        let descriptor = RequestDescriptor::get("/api/v1/agents");
        let list: AgentList = self.http.request_json(descriptor).await?;
        Ok(list.agents)
    }

    /// Remove an agent from the registry
    pub async fn deregister(&self, agent_id: &str) -> Result<()> {
        let descriptor = RequestDescriptor::delete(format!("/api/v1/agents/{}", agent_id));
        self.http.request(descriptor).await?;
        Ok(())
    }
}
