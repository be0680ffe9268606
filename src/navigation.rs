//! Sidebar menu pruning.
//!
//! Menus are static, application-defined trees. [`filter`] applies the menu
//! visibility rule to top-level entries only; [`Filter`] adds the role-name
//! gate and optional child pruning for renderers that want them.

use serde::{Deserialize, Serialize};

use crate::permission::{PermissionSet, can_menu_show};
use crate::role::{self, RoleKind};

/// A declarative menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Permission name gating this entry; `None` means always visible.
    #[serde(default)]
    pub required_permission: Option<String>,
    /// Roles this entry is limited to; empty means any role.
    #[serde(default)]
    pub roles: Vec<RoleKind>,
    #[serde(default)]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            icon: None,
            required_permission: None,
            roles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn requires(mut self, permission: impl Into<String>) -> Self {
        self.required_permission = Some(permission.into());
        self
    }

    pub fn roles(mut self, roles: impl IntoIterator<Item = RoleKind>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub fn child(mut self, child: NavigationItem) -> Self {
        self.children.push(child);
        self
    }
}

/// Keep the top-level items that pass the menu visibility rule, in order.
///
/// Children are not inspected.
pub fn filter<'a>(
    items: &'a [NavigationItem],
    permissions: Option<&PermissionSet>,
) -> Vec<&'a NavigationItem> {
    items
        .iter()
        .filter(|item| can_menu_show(permissions, item.required_permission.as_deref()))
        .collect()
}

/// How [`Filter`] treats an item's children.
///
/// Serialized lowercase; read in any case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildPolicy {
    /// Children are kept exactly as declared.
    #[default]
    Unfiltered,
    /// Each child is evaluated by the same rules as a top-level item.
    /// A parent left with no children is still kept.
    Independent,
}

impl ChildPolicy {
    /// Case-insensitive, surrounding whitespace ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unfiltered" => Some(ChildPolicy::Unfiltered),
            "independent" => Some(ChildPolicy::Independent),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ChildPolicy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| {
            serde::de::Error::unknown_variant(&raw, &["unfiltered", "independent"])
        })
    }
}

/// Menu filter with role gating and a child policy.
///
/// # Example
///
/// ```
/// use panelgate::navigation::{ChildPolicy, Filter, NavigationItem};
/// use panelgate::role::RoleKind;
///
/// let menu = vec![
///     NavigationItem::new("Dashboard", "/admin-panel/dashboard"),
///     NavigationItem::new("Invoices", "/admin-panel/invoices")
///         .requires("View Invoice Management")
///         .roles([RoleKind::Landlord, RoleKind::Manager]),
/// ];
///
/// let visible = Filter::new(None)
///     .role(Some(&RoleKind::User))
///     .children(ChildPolicy::Independent)
///     .apply(&menu);
/// assert_eq!(visible.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Filter<'a> {
    permissions: Option<&'a PermissionSet>,
    role: Option<&'a RoleKind>,
    children: ChildPolicy,
}

impl<'a> Filter<'a> {
    pub fn new(permissions: Option<&'a PermissionSet>) -> Self {
        Self {
            permissions,
            role: None,
            children: ChildPolicy::default(),
        }
    }

    /// Actor's role for role-restricted entries. Without one, restricted
    /// entries are hidden.
    pub fn role(mut self, role: Option<&'a RoleKind>) -> Self {
        self.role = role;
        self
    }

    pub fn children(mut self, policy: ChildPolicy) -> Self {
        self.children = policy;
        self
    }

    /// Whether a single item passes both gates, ignoring its children.
    pub fn visible(&self, item: &NavigationItem) -> bool {
        can_menu_show(self.permissions, item.required_permission.as_deref())
            && role::allows(&item.roles, self.role)
    }

    /// Pruned copy of `items`, order preserved.
    pub fn apply(&self, items: &[NavigationItem]) -> Vec<NavigationItem> {
        items
            .iter()
            .filter(|item| self.visible(item))
            .map(|item| {
                let mut kept = item.clone();
                if self.children == ChildPolicy::Independent {
                    kept.children.retain(|child| self.visible(child));
                }
                kept
            })
            .collect()
    }
}
