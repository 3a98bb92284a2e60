use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A managed property. The title is the natural key: stored trimmed, unique
/// among all properties when compared case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProperty {
    pub agent: super::AgentRef,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub agent_id: Option<Uuid>,
    pub title: Option<String>,
}

impl PropertyPatch {
    pub fn apply(self, property: &mut Property) {
        if let Some(agent_id) = self.agent_id {
            property.agent_id = agent_id;
        }
        if let Some(title) = self.title {
            property.title = title;
        }
    }
}

/// Reference to a property by id, by title, or both. Resolution tries the id
/// first and falls back to the title, compared the way title uniqueness is:
/// trimmed and case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct PropertyRef {
    pub property_id: Option<Uuid>,
    pub property_name: Option<String>,
}

impl PropertyRef {
    pub fn by_id(property_id: Uuid) -> Self {
        Self {
            property_id: Some(property_id),
            property_name: None,
        }
    }

    pub fn by_name(property_name: impl Into<String>) -> Self {
        Self {
            property_id: None,
            property_name: Some(property_name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.property_id.is_none() && self.property_name.is_none()
    }
}
