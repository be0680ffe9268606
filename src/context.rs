//! The access object renderers are handed.
//!
//! [`Access`] owns nothing but a handle to the session store. Every query
//! reads the store again, so a logout or an expiry is observed by the next
//! call without any invalidation step.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};

use crate::catalog::Module;
use crate::config::Config;
use crate::controls::Controls;
use crate::error::Result;
use crate::navigation::{ChildPolicy, Filter, NavigationItem};
use crate::permission::{self, PermissionSet};
use crate::role::RoleKind;
use crate::session::{Actor, Session, Store};

/// Session-backed authorization queries.
#[derive(Clone)]
pub struct Access {
    store: Arc<dyn Store>,
    ttl: Option<SignedDuration>,
    child_policy: ChildPolicy,
}

impl Access {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            ttl: None,
            child_policy: ChildPolicy::default(),
        }
    }

    /// Build from loaded configuration.
    pub fn from_config(store: Arc<dyn Store>, config: &Config) -> Self {
        Self {
            store,
            ttl: config
                .session
                .ttl_minutes
                .map(|m| SignedDuration::from_mins(i64::from(m))),
            child_policy: config.navigation.child_policy,
        }
    }

    /// Record a fresh login, stamping an expiry when a TTL is configured.
    pub fn login(&self, actor: Actor) -> Result<()> {
        let mut session = Session::new(actor);
        if let Some(ttl) = self.ttl {
            session = session.expiring_at(Timestamp::now().checked_add(ttl)?);
        }
        self.store.save(&session)
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<Session> {
        self.store.active()
    }

    /// The active session's permissions; empty without one.
    pub fn permissions(&self) -> PermissionSet {
        self.session()
            .map(|s| s.actor.role.permissions)
            .unwrap_or_default()
    }

    /// Coarse role of the active session.
    pub fn role(&self) -> Option<RoleKind> {
        self.session().map(|s| s.role_kind())
    }

    pub fn can(&self, name: &str) -> bool {
        let session = self.session();
        permission::can_perform(session.as_ref().map(Session::permissions), name)
    }

    pub fn can_any<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let session = self.session();
        permission::can_perform_any(session.as_ref().map(Session::permissions), names)
    }

    pub fn menu_visible(&self, required: Option<&str>) -> bool {
        let session = self.session();
        permission::can_menu_show(session.as_ref().map(Session::permissions), required)
    }

    /// `menu` pruned for the active session under the configured child
    /// policy.
    pub fn navigation(&self, menu: &[NavigationItem]) -> Vec<NavigationItem> {
        let session = self.session();
        let role = session.as_ref().map(Session::role_kind);
        Filter::new(session.as_ref().map(Session::permissions))
            .role(role.as_ref())
            .children(self.child_policy)
            .apply(menu)
    }

    pub fn controls(&self, module: Module) -> Controls {
        let session = self.session();
        Controls::resolve(session.as_ref().map(Session::permissions), module)
    }
}

impl std::fmt::Debug for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Access")
            .field("ttl", &self.ttl)
            .field("child_policy", &self.child_policy)
            .finish_non_exhaustive()
    }
}
