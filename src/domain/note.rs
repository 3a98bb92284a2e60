use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{AgentRef, PropertyRef};

/// A free-form note an agent attaches to a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub property_id: Uuid,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub agent: AgentRef,
    pub property: PropertyRef,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub agent_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
    pub description: Option<String>,
}

impl NotePatch {
    pub fn apply(self, note: &mut Note) {
        if let Some(agent_id) = self.agent_id {
            note.agent_id = agent_id;
        }
        if let Some(property_id) = self.property_id {
            note.property_id = property_id;
        }
        if let Some(description) = self.description {
            note.description = description;
        }
    }
}
