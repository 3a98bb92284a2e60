//! The relational store: six entity collections and the wiring that keeps
//! them consistent.
//!
//! All collections live behind one `RwLock`, so every check-then-mutate
//! sequence (uniqueness probe then insert, reference resolution then insert)
//! runs inside a single exclusive scope. Cross-entity creates (a note
//! consults both agents and properties) validate every reference before any
//! collection is touched, which keeps each call all-or-nothing.

mod agents;
mod families;
mod notes;
mod properties;
mod reminders;
mod tenants;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::Result;
use crate::domain::{Agent, Family, Note, Property, Reminder, Tenant};

use super::collection::{Collection, Record};

impl Record for Agent {
    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Property {
    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Family {
    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Tenant {
    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Note {
    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Reminder {
    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub agents: Collection<Agent>,
    pub properties: Collection<Property>,
    pub families: Collection<Family>,
    pub tenants: Collection<Tenant>,
    pub notes: Collection<Note>,
    pub reminders: Collection<Reminder>,
}

/// Composition root for the in-memory data layer. Owned by the application
/// for the process lifetime and shared behind an `Arc`; there is no implicit
/// global state.
#[derive(Debug, Default)]
pub struct RelationalStore {
    collections: RwLock<Collections>,
}

impl RelationalStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        Ok(self.collections.read()?)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        Ok(self.collections.write()?)
    }

    /// Ids are issued here and nowhere else.
    fn next_id() -> Uuid {
        Uuid::new_v4()
    }
}
