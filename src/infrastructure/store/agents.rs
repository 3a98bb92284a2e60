use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{Agent, AgentPatch, NewAgent};
use crate::infrastructure::integrity;

use super::RelationalStore;

impl RelationalStore {
    pub fn create_agent(&self, new_agent: NewAgent) -> Result<Agent> {
        let mut collections = self.write()?;

        integrity::require_present("firstName", &new_agent.first_name)?;
        integrity::require_present("lastName", &new_agent.last_name)?;
        integrity::require_present("email", &new_agent.email)?;
        integrity::require_email_format(&new_agent.email)?;
        integrity::require_unique_email(&collections.agents, &new_agent.email, None)?;

        let now = Utc::now();
        let agent = Agent {
            id: Self::next_id(),
            first_name: new_agent.first_name,
            last_name: new_agent.last_name,
            email: new_agent.email,
            mobile_number: new_agent.mobile_number,
            created_at: now,
            updated_at: now,
        };
        collections.agents.insert(agent)
    }

    pub fn list_agents(&self) -> Result<Vec<Agent>> {
        Ok(self.read()?.agents.all())
    }

    pub fn get_agent(&self, id: Uuid) -> Result<Agent> {
        self.read()?
            .agents
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("agent not found"))
    }

    pub fn update_agent(&self, id: Uuid, patch: AgentPatch) -> Result<Agent> {
        let mut collections = self.write()?;

        if !collections.agents.contains(id) {
            return Err(DomainError::not_found("agent not found"));
        }
        if let Some(email) = patch.email.as_deref() {
            integrity::require_email_format(email)?;
            integrity::require_unique_email(&collections.agents, email, Some(id))?;
        }

        collections
            .agents
            .update(id, |agent| patch.apply(agent))
            .ok_or_else(|| DomainError::internal("agent disappeared mid-update"))
    }

    pub fn delete_agent(&self, id: Uuid) -> Result<()> {
        if self.write()?.agents.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("agent not found"))
        }
    }
}
