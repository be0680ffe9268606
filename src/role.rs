//! Roles and the coarse role-name gate.
//!
//! Pages also switch on the role's display name ("Landlord", "Manager", ...)
//! independently of its permission set. That path is modeled here as
//! [`RoleKind`] and kept apart from the permission rules: the two are not
//! guaranteed to agree, and a caller that needs both must ask for both.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::permission::PermissionSet;

/// Known role names, matched exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleKind {
    SuperAdmin,
    Landlord,
    Manager,
    User,
    Other(String),
}

impl RoleKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "Super Admin" => RoleKind::SuperAdmin,
            "Landlord" => RoleKind::Landlord,
            "Manager" => RoleKind::Manager,
            "User" => RoleKind::User,
            other => RoleKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleKind::SuperAdmin => "Super Admin",
            RoleKind::Landlord => "Landlord",
            RoleKind::Manager => "Manager",
            RoleKind::User => "User",
            RoleKind::Other(name) => name,
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RoleKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoleKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(RoleKind::parse(&name))
    }
}

/// Role-name gate for an item restricted to `allowed` roles.
///
/// An empty list is unrestricted. Otherwise the actor's role must be listed;
/// an unknown role is refused.
pub fn allows(allowed: &[RoleKind], role: Option<&RoleKind>) -> bool {
    allowed.is_empty() || role.is_some_and(|r| allowed.contains(r))
}

/// A role with its embedded permission set.
///
/// Deserializes through [`Role::from_value`], so numeric ids and malformed
/// permission lists are accepted the same way a stored session is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    /// Identifier as stored; UUID on the backend but kept opaque here.
    pub id: Option<String>,
    pub name: String,
    pub permissions: PermissionSet,
}

impl Role {
    pub fn new(name: impl Into<String>, permissions: PermissionSet) -> Self {
        Self {
            id: None,
            name: name.into(),
            permissions,
        }
    }

    pub fn with_id(mut self, id: uuid::Uuid) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn kind(&self) -> RoleKind {
        RoleKind::parse(&self.name)
    }

    /// Read a role out of an untyped payload.
    ///
    /// Only `permissions` is required in spirit; a missing name reads as
    /// empty and a malformed permission list as the empty set.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = obj.get("id").and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let permissions = obj
            .get("permissions")
            .map(PermissionSet::from_value)
            .unwrap_or_default();
        Some(Self {
            id,
            name,
            permissions,
        })
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).ok_or_else(|| serde::de::Error::custom("role must be an object"))
    }
}
