use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::{NewTenant, Tenant, TenantPatch};
use crate::infrastructure::RelationalStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    #[serde(default)]
    pub family_id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl CreateTenantRequest {
    fn into_domain(self) -> NewTenant {
        NewTenant {
            family_id: self.family_id,
            first_name: self.first_name.unwrap_or_default(),
            middle_name: self.middle_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantRequest {
    #[serde(default)]
    pub family_id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UpdateTenantRequest {
    fn into_patch(self) -> TenantPatch {
        TenantPatch {
            family_id: self.family_id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantResponse {
    pub id: Uuid,
    pub family_id: Uuid,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tenant> for TenantResponse {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            family_id: tenant.family_id,
            first_name: tenant.first_name,
            middle_name: tenant.middle_name,
            last_name: tenant.last_name,
            created_at: tenant.created_at,
            updated_at: tenant.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct TenantService {
    store: Arc<RelationalStore>,
}

impl TenantService {
    pub fn new(store: Arc<RelationalStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: CreateTenantRequest) -> Result<TenantResponse> {
        let created = self.store.create_tenant(request.into_domain())?;
        debug!(tenant_id = %created.id, "tenant created");
        Ok(created.into())
    }

    pub fn list(&self) -> Result<Vec<TenantResponse>> {
        Ok(self
            .store
            .list_tenants()?
            .into_iter()
            .map(TenantResponse::from)
            .collect())
    }

    pub fn get(&self, id: Uuid) -> Result<TenantResponse> {
        Ok(self.store.get_tenant(id)?.into())
    }

    pub fn update(&self, id: Uuid, request: UpdateTenantRequest) -> Result<TenantResponse> {
        let updated = self.store.update_tenant(id, request.into_patch())?;
        debug!(tenant_id = %updated.id, "tenant updated");
        Ok(updated.into())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_tenant(id)?;
        debug!(tenant_id = %id, "tenant deleted");
        Ok(())
    }
}
