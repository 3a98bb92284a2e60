//! Validation gates applied before any mutation. Each check is a pure read
//! of current collection contents plus the proposed change; a failed check
//! means the operation performs no mutation at all.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::domain::errors::{DomainError, Result};
use crate::domain::{Agent, Family, Property};

use super::collection::{Collection, Record};
use super::resolve::title_key;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

/// Required-field presence: the value must contain something besides
/// whitespace.
pub(crate) fn require_present(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_email_format(email: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(DomainError::invalid_input(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Agent email uniqueness is an exact byte comparison; `excluding` skips the
/// entity being updated so it does not collide with itself.
pub(crate) fn require_unique_email(
    agents: &Collection<Agent>,
    email: &str,
    excluding: Option<Uuid>,
) -> Result<()> {
    let taken = agents
        .find_where(|agent| agent.email == email && Some(agent.id()) != excluding)
        .is_some();
    if taken {
        return Err(DomainError::conflict(format!(
            "email '{email}' already exists"
        )));
    }
    Ok(())
}

/// Property title uniqueness: trimmed, case-insensitive.
pub(crate) fn require_unique_title(
    properties: &Collection<Property>,
    title: &str,
    excluding: Option<Uuid>,
) -> Result<()> {
    let wanted = title_key(title);
    let taken = properties
        .find_where(|property| title_key(&property.title) == wanted && Some(property.id()) != excluding)
        .is_some();
    if taken {
        return Err(DomainError::conflict(format!(
            "property titled '{}' already exists",
            title.trim()
        )));
    }
    Ok(())
}

pub(crate) fn require_agent_exists(agents: &Collection<Agent>, agent_id: Uuid) -> Result<()> {
    if !agents.contains(agent_id) {
        return Err(DomainError::unresolved_reference(format!(
            "agent {agent_id} does not exist"
        )));
    }
    Ok(())
}

pub(crate) fn require_property_exists(
    properties: &Collection<Property>,
    property_id: Uuid,
) -> Result<()> {
    if !properties.contains(property_id) {
        return Err(DomainError::unresolved_reference(format!(
            "property {property_id} does not exist"
        )));
    }
    Ok(())
}

pub(crate) fn require_family_exists(families: &Collection<Family>, family_id: Uuid) -> Result<()> {
    if !families.contains(family_id) {
        return Err(DomainError::unresolved_reference(format!(
            "family {family_id} does not exist"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for email in ["a@b.co", "first.last@mail.example.org", "x+tag@host.io"] {
            assert!(require_email_format(email).is_ok(), "{email} should pass");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "plain", "@host.io", "user@", "user@host", "a b@c.de"] {
            assert!(require_email_format(email).is_err(), "{email} should fail");
        }
    }

    #[test]
    fn blank_values_fail_presence() {
        assert!(require_present("title", "   ").is_err());
        assert!(require_present("title", "Oak House").is_ok());
    }
}
