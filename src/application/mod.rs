//! Application services: one per entity kind. Each converts wire payloads
//! into domain payloads, delegates to the relational store and maps the
//! outcome back into a response shape.

pub mod agents;
pub mod families;
pub mod notes;
pub mod properties;
pub mod reminders;
pub mod tenants;
