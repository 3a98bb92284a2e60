use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::{AgentRef, NewNote, Note, NotePatch, PropertyRef};
use crate::infrastructure::RelationalStore;

/// Both sides of the note may arrive as an id, a natural key, or both;
/// each side resolves independently, id first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub property_id: Option<Uuid>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateNoteRequest {
    fn into_domain(self) -> NewNote {
        NewNote {
            agent: AgentRef {
                agent_id: self.agent_id,
                email: self.email,
            },
            property: PropertyRef {
                property_id: self.property_id,
                property_name: self.property_name,
            },
            description: self.description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub property_id: Option<Uuid>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateNoteRequest {
    fn into_patch(self) -> NotePatch {
        NotePatch {
            agent_id: self.agent_id,
            property_id: self.property_id,
            description: self.description,
        }
    }
}

/// Optional filter for the listing endpoint: notes by one agent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListQuery {
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
}

impl NoteListQuery {
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
pub struct NoteResponse {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub property_id: Uuid,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            agent_id: note.agent_id,
            property_id: note.property_id,
            description: note.description,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<RelationalStore>,
}

impl NoteService {
    pub fn new(store: Arc<RelationalStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: CreateNoteRequest) -> Result<NoteResponse> {
        let created = self.store.create_note(request.into_domain())?;
        debug!(note_id = %created.id, "note created");
        Ok(created.into())
    }

    pub fn list(&self, query: NoteListQuery) -> Result<Vec<NoteResponse>> {
        let notes = match query.agent_filter() {
            Some(reference) => self.store.notes_for_agent(&reference)?,
            None => self.store.list_notes()?,
        };
        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }

    pub fn get(&self, id: Uuid) -> Result<NoteResponse> {
        Ok(self.store.get_note(id)?.into())
    }

    pub fn update(&self, id: Uuid, request: UpdateNoteRequest) -> Result<NoteResponse> {
        let updated = self.store.update_note(id, request.into_patch())?;
        debug!(note_id = %updated.id, "note updated");
        Ok(updated.into())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_note(id)?;
        debug!(note_id = %id, "note deleted");
        Ok(())
    }
}
