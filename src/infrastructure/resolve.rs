//! Reference resolution: turns an [`AgentRef`] / [`PropertyRef`] into a
//! concrete id. The id wins when it matches; otherwise the natural key is
//! tried; a reference that matches neither fails. Resolution only reads.

use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{Agent, AgentRef, Property, PropertyRef};

use super::collection::{Collection, Record};

/// Case-insensitive comparison key for a property title, matching the
/// uniqueness domain of that natural key.
pub(crate) fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

pub(crate) fn resolve_agent(agents: &Collection<Agent>, reference: &AgentRef) -> Result<Uuid> {
    if reference.is_empty() {
        return Err(DomainError::unresolved_reference(
            "an agentId or email is required",
        ));
    }

    if let Some(agent_id) = reference.agent_id
        && agents.contains(agent_id)
    {
        return Ok(agent_id);
    }

    // Email is matched exactly, the same way agent uniqueness is enforced.
    if let Some(email) = reference.email.as_deref()
        && let Some(agent) = agents.find_where(|agent| agent.email == email)
    {
        return Ok(agent.id());
    }

    Err(DomainError::unresolved_reference(
        "agent reference matched no existing agent",
    ))
}

pub(crate) fn resolve_property(
    properties: &Collection<Property>,
    reference: &PropertyRef,
) -> Result<Uuid> {
    if reference.is_empty() {
        return Err(DomainError::unresolved_reference(
            "a propertyId or propertyName is required",
        ));
    }

    if let Some(property_id) = reference.property_id
        && properties.contains(property_id)
    {
        return Ok(property_id);
    }

    if let Some(property_name) = reference.property_name.as_deref() {
        let wanted = title_key(property_name);
        if let Some(property) = properties.find_where(|property| title_key(&property.title) == wanted)
        {
            return Ok(property.id());
        }
    }

    Err(DomainError::unresolved_reference(
        "property reference matched no existing property",
    ))
}
