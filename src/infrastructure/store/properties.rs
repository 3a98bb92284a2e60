use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{NewProperty, Property, PropertyPatch};
use crate::infrastructure::{integrity, resolve};

use super::RelationalStore;

impl RelationalStore {
    pub fn create_property(&self, new_property: NewProperty) -> Result<Property> {
        let mut collections = self.write()?;

        integrity::require_present("title", &new_property.title)?;
        integrity::require_unique_title(&collections.properties, &new_property.title, None)?;
        let agent_id = resolve::resolve_agent(&collections.agents, &new_property.agent)?;

        let now = Utc::now();
        let property = Property {
            id: Self::next_id(),
            agent_id,
            title: new_property.title.trim().to_string(),
            created_at: now,
            updated_at: now,
        };
        collections.properties.insert(property)
    }

    pub fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.read()?.properties.all())
    }

    pub fn get_property(&self, id: Uuid) -> Result<Property> {
        self.read()?
            .properties
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("property not found"))
    }

    pub fn update_property(&self, id: Uuid, mut patch: PropertyPatch) -> Result<Property> {
        let mut collections = self.write()?;

        if !collections.properties.contains(id) {
            return Err(DomainError::not_found("property not found"));
        }
        if let Some(agent_id) = patch.agent_id {
            integrity::require_agent_exists(&collections.agents, agent_id)?;
        }
        if let Some(title) = patch.title.take() {
            integrity::require_present("title", &title)?;
            integrity::require_unique_title(&collections.properties, &title, Some(id))?;
            patch.title = Some(title.trim().to_string());
        }

        collections
            .properties
            .update(id, |property| patch.apply(property))
            .ok_or_else(|| DomainError::internal("property disappeared mid-update"))
    }

    pub fn delete_property(&self, id: Uuid) -> Result<()> {
        if self.write()?.properties.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("property not found"))
        }
    }
}
