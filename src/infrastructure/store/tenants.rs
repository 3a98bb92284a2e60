use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{NewTenant, Tenant, TenantPatch};
use crate::infrastructure::integrity;

use super::RelationalStore;

impl RelationalStore {
    pub fn create_tenant(&self, new_tenant: NewTenant) -> Result<Tenant> {
        let mut collections = self.write()?;

        integrity::require_present("firstName", &new_tenant.first_name)?;
        integrity::require_present("middleName", &new_tenant.middle_name)?;
        integrity::require_present("lastName", &new_tenant.last_name)?;
        let family_id = new_tenant.family_id.ok_or_else(|| {
            DomainError::unresolved_reference("tenant creation requires a familyId")
        })?;
        integrity::require_family_exists(&collections.families, family_id)?;

        let now = Utc::now();
        let tenant = Tenant {
            id: Self::next_id(),
            family_id,
            first_name: new_tenant.first_name.trim().to_string(),
            middle_name: new_tenant.middle_name.trim().to_string(),
            last_name: new_tenant.last_name.trim().to_string(),
            created_at: now,
            updated_at: now,
        };
        collections.tenants.insert(tenant)
    }

    pub fn list_tenants(&self) -> Result<Vec<Tenant>> {
        Ok(self.read()?.tenants.all())
    }

    pub fn get_tenant(&self, id: Uuid) -> Result<Tenant> {
        self.read()?
            .tenants
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("tenant not found"))
    }

    pub fn update_tenant(&self, id: Uuid, patch: TenantPatch) -> Result<Tenant> {
        let mut collections = self.write()?;

        if !collections.tenants.contains(id) {
            return Err(DomainError::not_found("tenant not found"));
        }
        if let Some(family_id) = patch.family_id {
            integrity::require_family_exists(&collections.families, family_id)?;
        }

        collections
            .tenants
            .update(id, |tenant| patch.apply(tenant))
            .ok_or_else(|| DomainError::internal("tenant disappeared mid-update"))
    }

    pub fn delete_tenant(&self, id: Uuid) -> Result<()> {
        if self.write()?.tenants.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("tenant not found"))
        }
    }
}
