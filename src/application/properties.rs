use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::{AgentRef, NewProperty, Property, PropertyPatch};
use crate::infrastructure::RelationalStore;

/// The owning agent may be named by id, by email, or both; the id wins.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl CreatePropertyRequest {
    fn into_domain(self) -> NewProperty {
        NewProperty {
            agent: AgentRef {
                agent_id: self.agent_id,
                email: self.email,
            },
            title: self.title.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
}

impl UpdatePropertyRequest {
    fn into_patch(self) -> PropertyPatch {
        PropertyPatch {
            agent_id: self.agent_id,
            title: self.title,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            agent_id: property.agent_id,
            title: property.title,
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PropertyService {
    store: Arc<RelationalStore>,
}

impl PropertyService {
    pub fn new(store: Arc<RelationalStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: CreatePropertyRequest) -> Result<PropertyResponse> {
        let created = self.store.create_property(request.into_domain())?;
        debug!(property_id = %created.id, title = %created.title, "property created");
        Ok(created.into())
    }

    pub fn list(&self) -> Result<Vec<PropertyResponse>> {
        Ok(self
            .store
            .list_properties()?
            .into_iter()
            .map(PropertyResponse::from)
            .collect())
    }

    pub fn get(&self, id: Uuid) -> Result<PropertyResponse> {
        Ok(self.store.get_property(id)?.into())
    }

    pub fn update(&self, id: Uuid, request: UpdatePropertyRequest) -> Result<PropertyResponse> {
        let updated = self.store.update_property(id, request.into_patch())?;
        debug!(property_id = %updated.id, "property updated");
        Ok(updated.into())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_property(id)?;
        debug!(property_id = %id, "property deleted");
        Ok(())
    }
}
