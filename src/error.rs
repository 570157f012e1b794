//! Error types for docdex
//!
//! All modules use `DocdexResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docdex operations
pub type DocdexResult<T> = Result<T, DocdexError>;

/// All errors that can occur in docdex
#[derive(Error, Debug)]
pub enum DocdexError {
    // Transport errors
    #[error("Document not found: {path}")]
    NotFound { path: String },

    #[error("Fetch failed for {path}: {reason}")]
    Transport { path: String, reason: String },

    // Transform errors
    #[error("Transform failed for document {id}: {reason}")]
    Transform { id: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl DocdexError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a transport error for a source path
    pub fn transport(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a transform error for a document id
    pub fn transform(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transform {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is the transport's distinguished not-found status
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
