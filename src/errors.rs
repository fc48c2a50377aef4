// File: src/errors.rs
use std::path::PathBuf;

/// Crate-wide result type.
pub type Result<T, E = LowkeeseError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LowkeeseError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures of a dictionary store backend.
///
/// These never reach callers of the translation API: the dictionary manager
/// logs them and carries on with whatever it has in memory.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed dictionary '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed binary dictionary '{key}': {source}")]
    Binary {
        key: String,
        #[source]
        source: bincode::Error,
    },

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
