//! Configuration loading with layered overrides.
//!
//! Config is loaded in order (each layer overrides the previous):
//! 1. Default values
//! 2. Config file (TOML)
//! 3. Environment variables
//! 4. Explicit overrides from the embedding application
//!
//! Unparseable environment values are ignored; an invalid value in the file
//! is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::navigation::ChildPolicy;

/// panelgate configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub navigation: Navigation,
}

/// Session persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Where [`crate::session::FileStore`] keeps the session.
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
    /// Lifetime stamped on a session at login. `None` never expires.
    #[serde(default)]
    pub ttl_minutes: Option<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            path: default_session_path(),
            ttl_minutes: None,
        }
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from("session.json")
}

/// Menu filtering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub child_policy: ChildPolicy,
}

/// Values supplied directly by the embedding application (CLI flags,
/// settings screens). They win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub session_path: Option<&'a Path>,
    pub ttl_minutes: Option<u32>,
    pub child_policy: Option<ChildPolicy>,
}

/// Builder for loading configuration with customizable options.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Environment variable prefix (e.g., "MYAPP" -> MYAPP_SESSION_PATH)
    pub env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            env_prefix: "PANELGATE".to_string(),
        }
    }
}

impl ConfigLoader {
    /// Create a new config loader with the given environment prefix.
    pub fn new(env_prefix: impl Into<String>) -> Self {
        Self {
            env_prefix: env_prefix.into(),
        }
    }

    /// Load configuration from file, environment, and overrides.
    pub fn load(
        &self,
        config_path: Option<&Path>,
        overrides: Overrides<'_>,
    ) -> crate::Result<Config> {
        let mut config: Config = if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        let prefix = &self.env_prefix;

        if let Ok(path) = std::env::var(format!("{prefix}_SESSION_PATH")) {
            config.session.path = PathBuf::from(path);
        }
        if let Ok(ttl) = std::env::var(format!("{prefix}_SESSION_TTL_MINUTES"))
            && let Ok(minutes) = ttl.parse()
        {
            config.session.ttl_minutes = Some(minutes);
        }
        if let Ok(policy) = std::env::var(format!("{prefix}_CHILD_POLICY"))
            && let Some(policy) = ChildPolicy::parse(&policy)
        {
            config.navigation.child_policy = policy;
        }

        if let Some(path) = overrides.session_path {
            config.session.path = path.to_path_buf();
        }
        if let Some(minutes) = overrides.ttl_minutes {
            config.session.ttl_minutes = Some(minutes);
        }
        if let Some(policy) = overrides.child_policy {
            config.navigation.child_policy = policy;
        }

        if config.session.ttl_minutes == Some(0) {
            return Err(Error::Config(
                "session.ttl_minutes must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}
