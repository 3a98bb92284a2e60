use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A property agent. The email doubles as the agent's natural key and is
/// compared byte-for-byte: `Agent@Example.com` and `agent@example.com` are
/// two different agents.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAgent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AgentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
}

impl AgentPatch {
    /// Supplied fields replace, absent fields are retained.
    pub fn apply(self, agent: &mut Agent) {
        if let Some(first_name) = self.first_name {
            agent.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            agent.last_name = last_name;
        }
        if let Some(email) = self.email {
            agent.email = email;
        }
        if let Some(mobile_number) = self.mobile_number {
            agent.mobile_number = Some(mobile_number);
        }
    }
}

/// Reference to an agent by id, by email, or both. Resolution tries the id
/// first and falls back to the email.
#[derive(Debug, Clone, Default)]
pub struct AgentRef {
    pub agent_id: Option<Uuid>,
    pub email: Option<String>,
}

impl AgentRef {
    pub fn by_id(agent_id: Uuid) -> Self {
        Self {
            agent_id: Some(agent_id),
            email: None,
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            agent_id: None,
            email: Some(email.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.agent_id.is_none() && self.email.is_none()
    }
}
