use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{AgentRef, NewNote, Note, NotePatch};
use crate::infrastructure::{integrity, resolve};

use super::RelationalStore;

impl RelationalStore {
    /// Both references are resolved before anything is stored, so a note can
    /// never land with one valid and one dangling side.
    pub fn create_note(&self, new_note: NewNote) -> Result<Note> {
        let mut collections = self.write()?;

        integrity::require_present("description", &new_note.description)?;
        let agent_id = resolve::resolve_agent(&collections.agents, &new_note.agent)?;
        let property_id = resolve::resolve_property(&collections.properties, &new_note.property)?;

        let now = Utc::now();
        let note = Note {
            id: Self::next_id(),
            agent_id,
            property_id,
            description: new_note.description,
            created_at: now,
            updated_at: now,
        };
        collections.notes.insert(note)
    }

    pub fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.read()?.notes.all())
    }

    /// Notes written by one agent, in creation order.
    pub fn notes_for_agent(&self, reference: &AgentRef) -> Result<Vec<Note>> {
        let collections = self.read()?;
        let agent_id = resolve::resolve_agent(&collections.agents, reference)?;
        Ok(collections.notes.select_where(|note| note.agent_id == agent_id))
    }

    pub fn get_note(&self, id: Uuid) -> Result<Note> {
        self.read()?
            .notes
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("note not found"))
    }

    pub fn update_note(&self, id: Uuid, patch: NotePatch) -> Result<Note> {
        let mut collections = self.write()?;

        if !collections.notes.contains(id) {
            return Err(DomainError::not_found("note not found"));
        }
        if let Some(agent_id) = patch.agent_id {
            integrity::require_agent_exists(&collections.agents, agent_id)?;
        }
        if let Some(property_id) = patch.property_id {
            integrity::require_property_exists(&collections.properties, property_id)?;
        }

        collections
            .notes
            .update(id, |note| patch.apply(note))
            .ok_or_else(|| DomainError::internal("note disappeared mid-update"))
    }

    pub fn delete_note(&self, id: Uuid) -> Result<()> {
        if self.write()?.notes.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("note not found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewAgent, NewProperty, PropertyRef};

    fn seeded(store: &RelationalStore) -> (Uuid, Uuid) {
        let agent = store
            .create_agent(NewAgent {
                first_name: "Noa".to_string(),
                last_name: "Reyes".to_string(),
                email: "noa@example.com".to_string(),
                mobile_number: None,
            })
            .unwrap();
        let property = store
            .create_property(NewProperty {
                agent: AgentRef::by_id(agent.id),
                title: "Cedar Court".to_string(),
            })
            .unwrap();
        (agent.id, property.id)
    }

    #[test]
    fn natural_keys_resolve_to_the_same_note_as_ids() {
        let store = RelationalStore::new();
        let (agent_id, property_id) = seeded(&store);

        let by_keys = store
            .create_note(NewNote {
                agent: AgentRef::by_email("noa@example.com"),
                property: PropertyRef::by_name("cedar court"),
                description: "gutters need cleaning".to_string(),
            })
            .unwrap();

        assert_eq!(by_keys.agent_id, agent_id);
        assert_eq!(by_keys.property_id, property_id);
    }

    #[test]
    fn failed_creation_leaves_no_note_behind() {
        let store = RelationalStore::new();
        let (agent_id, _) = seeded(&store);

        let err = store
            .create_note(NewNote {
                agent: AgentRef::by_id(agent_id),
                property: PropertyRef::by_name("no such place"),
                description: "orphan".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::UnresolvedReference(_)));
        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn notes_for_agent_filters_by_author() {
        let store = RelationalStore::new();
        let (agent_id, property_id) = seeded(&store);
        let other = store
            .create_agent(NewAgent {
                first_name: "Uma".to_string(),
                last_name: "Perez".to_string(),
                email: "uma@example.com".to_string(),
                mobile_number: None,
            })
            .unwrap();

        for description in ["first", "second"] {
            store
                .create_note(NewNote {
                    agent: AgentRef::by_id(agent_id),
                    property: PropertyRef::by_id(property_id),
                    description: description.to_string(),
                })
                .unwrap();
        }
        store
            .create_note(NewNote {
                agent: AgentRef::by_id(other.id),
                property: PropertyRef::by_id(property_id),
                description: "someone else's".to_string(),
            })
            .unwrap();

        let mine = store.notes_for_agent(&AgentRef::by_id(agent_id)).unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|note| note.agent_id == agent_id));
    }
}
