//! Entity model for the property-management core.
//!
//! Every entity carries an immutable `id` and `created_at` plus an
//! `updated_at` refreshed by each successful mutation. `New*` payloads feed
//! creation, `*Patch` payloads feed partial updates, and `AgentRef` /
//! `PropertyRef` express references that may arrive as an id, a natural key,
//! or both.

pub mod agent;
pub mod errors;
pub mod family;
pub mod note;
pub mod property;
pub mod reminder;
pub mod tenant;

pub use agent::{Agent, AgentPatch, AgentRef, NewAgent};
pub use errors::{DomainError, Result};
pub use family::{Family, FamilyPatch, NewFamily};
pub use note::{NewNote, Note, NotePatch};
pub use property::{NewProperty, Property, PropertyPatch, PropertyRef};
pub use reminder::{NewReminder, Reminder, ReminderPatch};
pub use tenant::{NewTenant, Tenant, TenantPatch};
