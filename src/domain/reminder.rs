use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{AgentRef, PropertyRef};

/// A dated reminder an agent sets against a property. Always created
/// uncompleted; the flag is flipped through a patch.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub property_id: Uuid,
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReminder {
    pub agent: AgentRef,
    pub property: PropertyRef,
    pub title: String,
    pub event_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ReminderPatch {
    pub agent_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
    pub title: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub is_completed: Option<bool>,
}

impl ReminderPatch {
    pub fn apply(self, reminder: &mut Reminder) {
        if let Some(agent_id) = self.agent_id {
            reminder.agent_id = agent_id;
        }
        if let Some(property_id) = self.property_id {
            reminder.property_id = property_id;
        }
        if let Some(title) = self.title {
            reminder.title = title;
        }
        if let Some(event_date) = self.event_date {
            reminder.event_date = event_date;
        }
        if let Some(is_completed) = self.is_completed {
            reminder.is_completed = is_completed;
        }
    }
}
