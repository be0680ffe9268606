//! Permission model and the two authorization rules.
//!
//! A role's permissions are matched by `name` only. Two rules are evaluated
//! against the same set:
//!
//! - **Action authorization** ([`can_perform`]): the name is held.
//! - **Menu visibility** ([`can_menu_show`]): the name is held *and* its
//!   `show_on_menu` flag is set.
//!
//! Some capabilities authorize an in-page action without exposing a sidebar
//! entry, so the two rules are not interchangeable.
//!
//! # Example
//!
//! ```
//! use panelgate::permission::{self, Permission, PermissionSet};
//!
//! let set = PermissionSet::from_iter([
//!     Permission::new("View Invoice Management", "view", true),
//!     Permission::new("Update Invoice Management", "update", false),
//! ]);
//!
//! assert!(permission::can_menu_show(Some(&set), Some("View Invoice Management")));
//! assert!(!permission::can_menu_show(Some(&set), Some("Update Invoice Management")));
//! assert!(permission::can_perform(Some(&set), "Update Invoice Management"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named capability granted to a role.
///
/// Deserializes through [`Permission::from_value`]: only a string `name` is
/// required, a `null` or missing action reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permission {
    /// Sole key used for matching.
    pub name: String,
    /// Descriptive action category. Never consulted by the rules.
    pub action: String,
    /// Whether holding this permission also exposes a navigation entry.
    pub show_on_menu: bool,
}

impl Permission {
    pub fn new(name: impl Into<String>, action: impl Into<String>, show_on_menu: bool) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
            show_on_menu,
        }
    }

    /// Read a permission out of an untyped payload entry.
    ///
    /// Returns `None` when the entry is not an object or has no string `name`.
    /// A missing or non-boolean flag reads as `false`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("name")?.as_str()?;
        let action = obj.get("action").and_then(Value::as_str).unwrap_or_default();
        let show_on_menu = obj
            .get("show_on_menu")
            .or_else(|| obj.get("showOnMenu"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Some(Self::new(name, action, show_on_menu))
    }
}

/// The permissions held by one role, unique by name.
///
/// When the source contains the same name twice, the first occurrence wins
/// and later ones are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionSet {
    entries: Vec<Permission>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an untyped `permissions` payload.
    ///
    /// Anything other than an array yields an empty set; malformed entries
    /// are skipped.
    pub fn from_value(value: &Value) -> Self {
        match value.as_array() {
            Some(items) => items.iter().filter_map(Permission::from_value).collect(),
            None => Self::new(),
        }
    }

    /// First permission with the given name.
    pub fn get(&self, name: &str) -> Option<&Permission> {
        self.entries.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Permission> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of every permission flagged for the menu.
    pub fn menu_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|p| p.show_on_menu)
            .map(|p| p.name.as_str())
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();
        for permission in iter {
            if seen.contains(permission.name.as_str()) {
                tracing::debug!(name = %permission.name, "dropping duplicate permission");
                continue;
            }
            seen.insert(permission.name.clone());
            entries.push(permission);
        }
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a Permission;
    type IntoIter = std::slice::Iter<'a, Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("permission requires a string `name`"))
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Lenient on purpose: a bad payload is an empty set, not a failure.
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Menu visibility rule.
///
/// `true` when no permission is required (`None` or empty). Otherwise the
/// named permission must be held with `show_on_menu` set. An absent set is
/// treated as empty.
pub fn can_menu_show(permissions: Option<&PermissionSet>, required: Option<&str>) -> bool {
    let Some(required) = required.filter(|r| !r.is_empty()) else {
        return true;
    };
    let shown = permissions
        .and_then(|set| set.get(required))
        .is_some_and(|p| p.show_on_menu);
    tracing::trace!(permission = required, shown, "menu visibility");
    shown
}

/// Action authorization rule: the named permission is held, whatever its
/// menu flag. An absent set is treated as empty.
pub fn can_perform(permissions: Option<&PermissionSet>, name: &str) -> bool {
    let allowed = permissions.is_some_and(|set| set.contains(name));
    tracing::trace!(permission = name, allowed, "action authorization");
    allowed
}

/// `true` if [`can_perform`] holds for at least one of `names`.
pub fn can_perform_any<'a, I>(permissions: Option<&PermissionSet>, names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .any(|name| can_perform(permissions, name))
}
