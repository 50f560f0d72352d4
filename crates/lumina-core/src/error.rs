//! Error types for lumina-core

use thiserror::Error;

/// Result type alias using lumina-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lumina-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// Space not found
    #[error("Space not found: {0}")]
    SpaceNotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),
}
