//! Per-module action decisions for list pages.
//!
//! List pages show create buttons, row edit/delete icons, and approve/reject
//! buttons on invoice line items. All of them use the action authorization
//! rule; the menu flag plays no part here.

use serde::Serialize;

use crate::catalog::{Module, Verb, verb};
use crate::permission::{PermissionSet, can_perform};

/// Which action controls a module's page may render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    /// Approve and reject share the update permission.
    pub approve: bool,
    pub reject: bool,
    /// Whether a table needs an actions column at all.
    pub actions_column: bool,
}

impl Controls {
    pub fn resolve(permissions: Option<&PermissionSet>, module: Module) -> Self {
        let create = allowed::<verb::Create>(permissions, module);
        let update = allowed::<verb::Update>(permissions, module);
        let delete = allowed::<verb::Delete>(permissions, module);
        Self {
            create,
            update,
            delete,
            approve: update,
            reject: update,
            actions_column: update || delete,
        }
    }

    /// No control is rendered.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Action authorization for `V` on `module`.
pub fn allowed<V: Verb>(permissions: Option<&PermissionSet>, module: Module) -> bool {
    can_perform(permissions, &module.permission::<V>())
}
