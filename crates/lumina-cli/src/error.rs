use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] lumina_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Assistant error: {0}")]
    Assistant(#[from] lumina_core::assistant::AssistantError),
    #[error("No note content provided")]
    EmptyContent,
    #[error("Note not found for id/prefix: {0}")]
    NoteNotFound(String),
    #[error("Space not found for id/prefix: {0}")]
    SpaceNotFound(String),
    #[error("{0}")]
    AmbiguousId(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Import failed: the file is not a valid Lumina export")]
    ImportRejected,
}
