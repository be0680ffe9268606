//! Session payloads and the stores that hold them.
//!
//! The login flow (outside this crate) writes the authenticated user, with
//! the role and its permissions embedded, into a [`Store`]. Everything else
//! only reads it. A store that holds nothing, or holds something that no
//! longer parses, or holds an expired session, reads as "no actor": every
//! query made through [`crate::context::Access`] then denies.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;
use crate::permission::PermissionSet;
use crate::role::{Role, RoleKind};

/// The authenticated principal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub role: Role,
    /// Remaining user fields (names, email, ...). Carried, never consulted.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Actor {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            profile: Map::new(),
        }
    }

    /// Read an actor from a stored user object. `None` without a `role`
    /// object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let role = Role::from_value(obj.get("role")?)?;
        let profile = obj
            .iter()
            .filter(|(k, _)| k.as_str() != "role")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Some(Self { role, profile })
    }
}

impl<'de> Deserialize<'de> for Actor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("user has no `role` object"))
    }
}

/// An actor plus an optional expiry.
///
/// Deserializes through [`from_value`], accepting the same documents as
/// [`parse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    #[serde(rename = "user")]
    pub actor: Actor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}

impl Session {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, at: Timestamp) -> Self {
        self.expires_at = Some(at);
        self
    }

    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.actor.role.permissions
    }

    pub fn role_kind(&self) -> RoleKind {
        self.actor.role.kind()
    }
}

impl<'de> Deserialize<'de> for Session {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).ok_or_else(|| serde::de::Error::custom("session has no `role` object"))
    }
}

/// Parse a stored session document.
///
/// Accepts the bare user object the panels keep under their `USER` key, or
/// a wrapped `{"user": {...}, "expires_at": "..."}` document. A top-level
/// `role` object always marks the bare form, so a user object may carry its
/// own unrelated `user` field. Returns `None` for anything that carries no
/// role. An unparseable `expires_at` is treated as already expired.
pub fn parse(raw: &str) -> Option<Session> {
    let value: Value = serde_json::from_str(raw).ok()?;
    from_value(&value)
}

/// [`parse`] for an already decoded document.
pub fn from_value(value: &Value) -> Option<Session> {
    if value.get("role").is_some_and(Value::is_object) {
        return Actor::from_value(value).map(Session::new);
    }
    let actor = Actor::from_value(value.get("user")?)?;
    let expires_at = match value.get("expires_at") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(
            raw.as_str()
                .and_then(|s| s.parse::<Timestamp>().ok())
                .unwrap_or(Timestamp::UNIX_EPOCH),
        ),
    };
    Some(Session { actor, expires_at })
}

/// Where the current session lives.
///
/// Written once at login, cleared at logout, read by every query.
pub trait Store: Send + Sync {
    /// The stored session, if one is present and readable.
    fn load(&self) -> Option<Session>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove the stored session. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;

    /// The stored session unless it expired at or before `now`.
    fn active_at(&self, now: Timestamp) -> Option<Session> {
        let session = self.load()?;
        if session.is_expired_at(now) {
            debug!("stored session expired");
            return None;
        }
        Some(session)
    }

    /// [`Store::active_at`] against the current time.
    fn active(&self) -> Option<Session> {
        self.active_at(Timestamp::now())
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            slot: RwLock::new(Some(session)),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Option<Session> {
        // A writer panicked mid-update; the contents can't be trusted.
        self.slot.read().ok()?.clone()
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// JSON file store, surviving process restarts the way the panels' local
/// storage survives page reloads.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a save is staged in before it replaces [`Self::path`].
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("session"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for FileStore {
    fn load(&self) -> Option<Session> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), "failed to read session: {e}");
                return None;
            }
        };
        let session = parse(&raw);
        if session.is_none() {
            warn!(path = %self.path.display(), "stored session is corrupted");
        }
        session
    }

    fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_vec_pretty(session)?;
        let temp_path = self.temp_path();

        // Readers only ever see the old file or the complete new one.
        std::fs::write(&temp_path, json)?;
        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
