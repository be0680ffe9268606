//! Error types for the ambient parts of panelgate.
//!
//! Permission predicates never fail; only configuration loading and session
//! persistence return these.

/// Error type for panelgate operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Time error: {0}")]
    Time(#[from] jiff::Error),
}

/// Result type alias using panelgate's Error.
pub type Result<T> = std::result::Result<T, Error>;
