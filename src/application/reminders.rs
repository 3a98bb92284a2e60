use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::{AgentRef, NewReminder, PropertyRef, Reminder, ReminderPatch};
use crate::infrastructure::RelationalStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderRequest {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub property_id: Option<Uuid>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
}

impl CreateReminderRequest {
    fn into_domain(self) -> NewReminder {
        NewReminder {
            agent: AgentRef {
                agent_id: self.agent_id,
                email: self.email,
            },
            property: PropertyRef {
                property_id: self.property_id,
                property_name: self.property_name,
            },
            title: self.title.unwrap_or_default(),
            event_date: self.event_date,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderRequest {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub property_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl UpdateReminderRequest {
    fn into_patch(self) -> ReminderPatch {
        ReminderPatch {
            agent_id: self.agent_id,
            property_id: self.property_id,
            title: self.title,
            event_date: self.event_date,
            is_completed: self.is_completed,
        }
    }
}

/// Optional filter for the listing endpoint: reminders of one agent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderListQuery {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ReminderListQuery {
    fn agent_filter(&self) -> Option<AgentRef> {
        if self.agent_id.is_none() && self.email.is_none() {
            return None;
        }
        Some(AgentRef {
            agent_id: self.agent_id,
            email: self.email.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub property_id: Uuid,
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reminder> for ReminderResponse {
    fn from(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            agent_id: reminder.agent_id,
            property_id: reminder.property_id,
            title: reminder.title,
            event_date: reminder.event_date,
            is_completed: reminder.is_completed,
            created_at: reminder.created_at,
            updated_at: reminder.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct ReminderService {
    store: Arc<RelationalStore>,
}

impl ReminderService {
    pub fn new(store: Arc<RelationalStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: CreateReminderRequest) -> Result<ReminderResponse> {
        let created = self.store.create_reminder(request.into_domain())?;
        debug!(reminder_id = %created.id, "reminder created");
        Ok(created.into())
    }

    pub fn list(&self, query: ReminderListQuery) -> Result<Vec<ReminderResponse>> {
        let reminders = match query.agent_filter() {
            Some(reference) => self.store.reminders_for_agent(&reference)?,
            None => self.store.list_reminders()?,
        };
        Ok(reminders.into_iter().map(ReminderResponse::from).collect())
    }

    pub fn get(&self, id: Uuid) -> Result<ReminderResponse> {
        Ok(self.store.get_reminder(id)?.into())
    }

    pub fn update(&self, id: Uuid, request: UpdateReminderRequest) -> Result<ReminderResponse> {
        let updated = self.store.update_reminder(id, request.into_patch())?;
        debug!(reminder_id = %updated.id, "reminder updated");
        Ok(updated.into())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_reminder(id)?;
        debug!(reminder_id = %id, "reminder deleted");
        Ok(())
    }
}
