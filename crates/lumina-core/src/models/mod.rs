//! Data models for Lumina

mod note;
mod settings;
mod space;

pub use note::{derive_preview, Note, NoteId, NotePatch, PREVIEW_CHARS};
pub use settings::{FontSize, Settings, ThemeMode};
pub use space::{Space, SpaceId, SpacePatch};
