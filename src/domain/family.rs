use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A family occupying a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Family {
    pub id: Uuid,
    pub property_id: Uuid,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFamily {
    pub property_id: Option<Uuid>,
    pub last_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct FamilyPatch {
    pub property_id: Option<Uuid>,
    pub last_name: Option<String>,
}

impl FamilyPatch {
    pub fn apply(self, family: &mut Family) {
        if let Some(property_id) = self.property_id {
            family.property_id = property_id;
        }
        if let Some(last_name) = self.last_name {
            family.last_name = last_name;
        }
    }
}
