use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{Family, FamilyPatch, NewFamily};
use crate::infrastructure::integrity;

use super::RelationalStore;

impl RelationalStore {
    pub fn create_family(&self, new_family: NewFamily) -> Result<Family> {
        let mut collections = self.write()?;

        integrity::require_present("lastName", &new_family.last_name)?;
        let property_id = new_family.property_id.ok_or_else(|| {
            DomainError::unresolved_reference("family creation requires a propertyId")
        })?;
        integrity::require_property_exists(&collections.properties, property_id)?;

        let now = Utc::now();
        let family = Family {
            id: Self::next_id(),
            property_id,
            last_name: new_family.last_name.trim().to_string(),
            created_at: now,
            updated_at: now,
        };
        collections.families.insert(family)
    }

    pub fn list_families(&self) -> Result<Vec<Family>> {
        Ok(self.read()?.families.all())
    }

    pub fn get_family(&self, id: Uuid) -> Result<Family> {
        self.read()?
            .families
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("family not found"))
    }

    pub fn update_family(&self, id: Uuid, patch: FamilyPatch) -> Result<Family> {
        let mut collections = self.write()?;

        if !collections.families.contains(id) {
            return Err(DomainError::not_found("family not found"));
        }
        if let Some(property_id) = patch.property_id {
            integrity::require_property_exists(&collections.properties, property_id)?;
        }

        collections
            .families
            .update(id, |family| patch.apply(family))
            .ok_or_else(|| DomainError::internal("family disappeared mid-update"))
    }

    pub fn delete_family(&self, id: Uuid) -> Result<()> {
        if self.write()?.families.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("family not found"))
        }
    }
}
