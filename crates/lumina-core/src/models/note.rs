//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::space::SpaceId;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Number of content characters carried into the derived preview
pub const PREVIEW_CHARS: usize = 100;

/// Derive the list preview from note content: a fixed-length prefix
/// followed by an ellipsis.
#[must_use]
pub fn derive_preview(content: &str) -> String {
    let prefix: String = content.chars().take(PREVIEW_CHARS).collect();
    format!("{prefix}...")
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Display title
    pub title: String,
    /// Markdown content
    pub content: String,
    /// Derived content prefix shown in lists
    pub preview: String,
    /// User-assigned tags, in assignment order
    pub tags: Vec<String>,
    /// Starred flag
    pub starred: bool,
    /// Owning space, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<SpaceId>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    pub updated_at: i64,
    /// Present in the serialized shape for forward compatibility; never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl Note {
    /// Create a new empty note, optionally inside a space
    #[must_use]
    pub fn new(space_id: Option<SpaceId>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: NoteId::new(),
            title: "New note".to_string(),
            content: String::new(),
            preview: "New note...".to_string(),
            tags: Vec::new(),
            starred: false,
            space_id,
            created_at: now,
            updated_at: now,
            version: None,
        }
    }

    /// Merge a partial update into this note.
    ///
    /// The preview is recomputed only when content changes; a new content
    /// value always bumps `updated_at`.
    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.preview = derive_preview(&content);
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(starred) = patch.starred {
            self.starred = starred;
        }
        if let Some(space_id) = patch.space_id {
            self.space_id = space_id;
        }
        self.updated_at = chrono::Utc::now().timestamp_millis();
    }

    /// Check if note content is empty (whitespace-only counts as empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A partial note update.
///
/// Unset fields leave the stored value untouched. `space_id` distinguishes
/// "leave alone" (`None`) from "detach from its space" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub starred: Option<bool>,
    pub space_id: Option<Option<SpaceId>>,
}

impl NotePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub const fn starred(mut self, starred: bool) -> Self {
        self.starred = Some(starred);
        self
    }

    #[must_use]
    pub const fn space_id(mut self, space_id: Option<SpaceId>) -> Self {
        self.space_id = Some(space_id);
        self
    }
}
