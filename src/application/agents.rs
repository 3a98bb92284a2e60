use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::{Agent, AgentPatch, NewAgent};
use crate::infrastructure::RelationalStore;

/// Creation payload. Required fields are modelled as options so a missing
/// field reaches the core and comes back as a typed invalid-input error
/// instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
}

impl CreateAgentRequest {
    fn into_domain(self) -> NewAgent {
        NewAgent {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            mobile_number: self.mobile_number,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgentRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
}

impl UpdateAgentRequest {
    fn into_patch(self) -> AgentPatch {
        AgentPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            mobile_number: self.mobile_number,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Agent> for AgentResponse {
    fn from(agent: Agent) -> Self {
        Self {
            id: agent.id,
            first_name: agent.first_name,
            last_name: agent.last_name,
            email: agent.email,
            mobile_number: agent.mobile_number,
            created_at: agent.created_at,
            updated_at: agent.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct AgentService {
    store: Arc<RelationalStore>,
}

impl AgentService {
    pub fn new(store: Arc<RelationalStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: CreateAgentRequest) -> Result<AgentResponse> {
        let created = self.store.create_agent(request.into_domain())?;
        debug!(agent_id = %created.id, "agent created");
        Ok(created.into())
    }

    pub fn list(&self) -> Result<Vec<AgentResponse>> {
        Ok(self
            .store
            .list_agents()?
            .into_iter()
            .map(AgentResponse::from)
            .collect())
    }

    pub fn get(&self, id: Uuid) -> Result<AgentResponse> {
        Ok(self.store.get_agent(id)?.into())
    }

    pub fn update(&self, id: Uuid, request: UpdateAgentRequest) -> Result<AgentResponse> {
        let updated = self.store.update_agent(id, request.into_patch())?;
        debug!(agent_id = %updated.id, "agent updated");
        Ok(updated.into())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_agent(id)?;
        debug!(agent_id = %id, "agent deleted");
        Ok(())
    }
}
