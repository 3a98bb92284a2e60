use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::{Family, FamilyPatch, NewFamily};
use crate::infrastructure::RelationalStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyRequest {
    #[serde(default)]
    pub property_id: Option<Uuid>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl CreateFamilyRequest {
    fn into_domain(self) -> NewFamily {
        NewFamily {
            property_id: self.property_id,
            last_name: self.last_name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFamilyRequest {
    #[serde(default)]
    pub property_id: Option<Uuid>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UpdateFamilyRequest {
    fn into_patch(self) -> FamilyPatch {
        FamilyPatch {
            property_id: self.property_id,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyResponse {
    pub id: Uuid,
    pub property_id: Uuid,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Family> for FamilyResponse {
    fn from(family: Family) -> Self {
        Self {
            id: family.id,
            property_id: family.property_id,
            last_name: family.last_name,
            created_at: family.created_at,
            updated_at: family.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct FamilyService {
    store: Arc<RelationalStore>,
}

impl FamilyService {
    pub fn new(store: Arc<RelationalStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: CreateFamilyRequest) -> Result<FamilyResponse> {
        let created = self.store.create_family(request.into_domain())?;
        debug!(family_id = %created.id, "family created");
        Ok(created.into())
    }

    pub fn list(&self) -> Result<Vec<FamilyResponse>> {
        Ok(self
            .store
            .list_families()?
            .into_iter()
            .map(FamilyResponse::from)
            .collect())
    }

    pub fn get(&self, id: Uuid) -> Result<FamilyResponse> {
        Ok(self.store.get_family(id)?.into())
    }

    pub fn update(&self, id: Uuid, request: UpdateFamilyRequest) -> Result<FamilyResponse> {
        let updated = self.store.update_family(id, request.into_patch())?;
        debug!(family_id = %updated.id, "family updated");
        Ok(updated.into())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_family(id)?;
        debug!(family_id = %id, "family deleted");
        Ok(())
    }
}
