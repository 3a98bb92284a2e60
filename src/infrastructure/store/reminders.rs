use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{AgentRef, NewReminder, Reminder, ReminderPatch};
use crate::infrastructure::{integrity, resolve};

use super::RelationalStore;

impl RelationalStore {
    pub fn create_reminder(&self, new_reminder: NewReminder) -> Result<Reminder> {
        let mut collections = self.write()?;

        integrity::require_present("title", &new_reminder.title)?;
        let event_date = new_reminder
            .event_date
            .ok_or_else(|| DomainError::invalid_input("eventDate is required"))?;
        let agent_id = resolve::resolve_agent(&collections.agents, &new_reminder.agent)?;
        let property_id =
            resolve::resolve_property(&collections.properties, &new_reminder.property)?;

        let now = Utc::now();
        let reminder = Reminder {
            id: Self::next_id(),
            agent_id,
            property_id,
            title: new_reminder.title.trim().to_string(),
            event_date,
            // Reminders always start open, whatever the caller sent.
            is_completed: false,
            created_at: now,
            updated_at: now,
        };
        collections.reminders.insert(reminder)
    }

    pub fn list_reminders(&self) -> Result<Vec<Reminder>> {
        Ok(self.read()?.reminders.all())
    }

    /// Reminders belonging to one agent, in creation order.
    pub fn reminders_for_agent(&self, reference: &AgentRef) -> Result<Vec<Reminder>> {
        let collections = self.read()?;
        let agent_id = resolve::resolve_agent(&collections.agents, reference)?;
        Ok(collections
            .reminders
            .select_where(|reminder| reminder.agent_id == agent_id))
    }

    pub fn get_reminder(&self, id: Uuid) -> Result<Reminder> {
        self.read()?
            .reminders
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("reminder not found"))
    }

    pub fn update_reminder(&self, id: Uuid, patch: ReminderPatch) -> Result<Reminder> {
        let mut collections = self.write()?;

        if !collections.reminders.contains(id) {
            return Err(DomainError::not_found("reminder not found"));
        }
        if let Some(agent_id) = patch.agent_id {
            integrity::require_agent_exists(&collections.agents, agent_id)?;
        }
        if let Some(property_id) = patch.property_id {
            integrity::require_property_exists(&collections.properties, property_id)?;
        }

        collections
            .reminders
            .update(id, |reminder| patch.apply(reminder))
            .ok_or_else(|| DomainError::internal("reminder disappeared mid-update"))
    }

    pub fn delete_reminder(&self, id: Uuid) -> Result<()> {
        if self.write()?.reminders.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("reminder not found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewAgent, NewProperty, PropertyRef};
    use chrono::{Duration, Utc};

    fn seeded(store: &RelationalStore) -> (Uuid, Uuid) {
        let agent = store
            .create_agent(NewAgent {
                first_name: "Kim".to_string(),
                last_name: "Soto".to_string(),
                email: "kim@example.com".to_string(),
                mobile_number: Some("555-0142".to_string()),
            })
            .unwrap();
        let property = store
            .create_property(NewProperty {
                agent: AgentRef::by_id(agent.id),
                title: "Birch Lodge".to_string(),
            })
            .unwrap();
        (agent.id, property.id)
    }

    #[test]
    fn reminders_start_uncompleted() {
        let store = RelationalStore::new();
        let (_, property_id) = seeded(&store);

        let reminder = store
            .create_reminder(NewReminder {
                agent: AgentRef::by_email("kim@example.com"),
                property: PropertyRef::by_id(property_id),
                title: " boiler inspection ".to_string(),
                event_date: Some(Utc::now() + Duration::days(7)),
            })
            .unwrap();

        assert!(!reminder.is_completed);
        assert_eq!(reminder.title, "boiler inspection");
    }

    #[test]
    fn missing_event_date_is_invalid_input() {
        let store = RelationalStore::new();
        let (agent_id, property_id) = seeded(&store);

        let err = store
            .create_reminder(NewReminder {
                agent: AgentRef::by_id(agent_id),
                property: PropertyRef::by_id(property_id),
                title: "undated".to_string(),
                event_date: None,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(store.list_reminders().unwrap().is_empty());
    }

    #[test]
    fn completion_is_flipped_through_a_patch() {
        let store = RelationalStore::new();
        let (agent_id, property_id) = seeded(&store);
        let reminder = store
            .create_reminder(NewReminder {
                agent: AgentRef::by_id(agent_id),
                property: PropertyRef::by_id(property_id),
                title: "renew lease".to_string(),
                event_date: Some(Utc::now() + Duration::days(30)),
            })
            .unwrap();

        let done = store
            .update_reminder(
                reminder.id,
                ReminderPatch {
                    is_completed: Some(true),
                    ..ReminderPatch::default()
                },
            )
            .unwrap();
        assert!(done.is_completed);
        assert_eq!(done.title, "renew lease");
    }

    #[test]
    fn unknown_filter_agent_is_an_unresolved_reference() {
        let store = RelationalStore::new();
        seeded(&store);

        let err = store
            .reminders_for_agent(&AgentRef::by_email("ghost@example.com"))
            .unwrap_err();
        assert!(matches!(err, DomainError::UnresolvedReference(_)));
    }
}
