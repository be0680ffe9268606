//! panelgate - permission-gated navigation and action authorization for
//! admin panels.
//!
//! A role's permission set is fetched at login and travels with the session.
//! panelgate answers two questions against it:
//!
//! - **Permission**: the two authorization rules (`can_perform`,
//!   `can_menu_show`) as pure functions over a [`PermissionSet`]
//! - **Catalog**: the seeded `"<Verb> <Module> Management"` names, spelled
//!   through typed verbs
//! - **Navigation**: sidebar menu pruning
//! - **Controls**: per-module create/update/delete/approve/reject decisions
//! - **Role**: the coarse role-name gate, kept apart from permissions
//! - **Session**: the stored login payload and its stores
//! - **Context**: the injected [`Access`] object renderers query
//! - **Config**: layered configuration (defaults → file → env → overrides)
//!
//! Missing or malformed session data never raises: it denies.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use panelgate::catalog::{Module, verb};
//! use panelgate::session::{Actor, MemoryStore};
//! use panelgate::{Access, PermissionSet, Role};
//!
//! let access = Access::new(Arc::new(MemoryStore::new()));
//! let permissions = PermissionSet::from_iter(Module::Invoice.seeded_all());
//! access.login(Actor::new(Role::new("Landlord", permissions))).unwrap();
//!
//! let update = Module::Invoice.permission::<verb::Update>();
//! assert!(access.can(&update));
//! assert!(!access.menu_visible(Some(&update)));
//!
//! access.logout().unwrap();
//! assert!(!access.can(&update));
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod controls;
pub mod error;
pub mod navigation;
pub mod permission;
pub mod role;
pub mod session;

// Re-export main types at crate root
pub use catalog::{Module, Verb, verb};
pub use config::{Config, ConfigLoader};
pub use context::Access;
pub use controls::Controls;
pub use error::{Error, Result};
pub use navigation::{ChildPolicy, NavigationItem};
pub use permission::{Permission, PermissionSet, can_menu_show, can_perform, can_perform_any};
pub use role::{Role, RoleKind};
pub use session::{Actor, FileStore, MemoryStore, Session, Store};
