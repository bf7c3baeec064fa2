//! Domain errors. Used by ports and use cases.
//!
//! Loaders keep the underlying I/O or parser error as the source.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unsupported file format '{0}' (use json or xml)")]
    UnsupportedFormat(String),

    #[error("failed to load {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("failed to write report")]
    Output(#[source] std::io::Error),
}

impl DomainError {
    pub fn load(path: impl Into<PathBuf>, source: impl Into<LoadError>) -> Self {
        Self::Load {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Why a single file could not be turned into an entity.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    /// The document is well-formed but its top level is not the expected entity.
    #[error("expected {expected} at document root, found {found}")]
    RootMismatch { expected: &'static str, found: String },
}
