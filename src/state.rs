use std::sync::Arc;

use crate::application::{
    agents::AgentService, families::FamilyService, notes::NoteService,
    properties::PropertyService, reminders::ReminderService, tenants::TenantService,
};
use crate::infrastructure::RelationalStore;

/// Shared handler state: one service per entity kind, all backed by the same
/// relational store.
#[derive(Clone)]
pub struct AppState {
    pub agents: AgentService,
    pub properties: PropertyService,
    pub families: FamilyService,
    pub tenants: TenantService,
    pub notes: NoteService,
    pub reminders: ReminderService,
}

impl AppState {
    pub fn new(store: Arc<RelationalStore>) -> Self {
        Self {
            agents: AgentService::new(Arc::clone(&store)),
            properties: PropertyService::new(Arc::clone(&store)),
            families: FamilyService::new(Arc::clone(&store)),
            tenants: TenantService::new(Arc::clone(&store)),
            notes: NoteService::new(Arc::clone(&store)),
            reminders: ReminderService::new(store),
        }
    }
}
