use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A tenant belonging to a family.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub id: Uuid,
    pub family_id: Uuid,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTenant {
    pub family_id: Option<Uuid>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct TenantPatch {
    pub family_id: Option<Uuid>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl TenantPatch {
    pub fn apply(self, tenant: &mut Tenant) {
        if let Some(family_id) = self.family_id {
            tenant.family_id = family_id;
        }
        if let Some(first_name) = self.first_name {
            tenant.first_name = first_name;
        }
        if let Some(middle_name) = self.middle_name {
            tenant.middle_name = middle_name;
        }
        if let Some(last_name) = self.last_name {
            tenant.last_name = last_name;
        }
    }
}
