//! The notes and spaces store.
//!
//! An owned state container holding both collections plus the transient UI
//! state around them. All mutation flows through the methods here; every
//! mutation persists a `{notes, spaces}` snapshot to the backing key-value
//! storage under a fixed key. Snapshot writes are best-effort (the backing
//! store mirrors web storage, which has no failure channel a mutation could
//! surface), so persistence errors are logged rather than returned.

mod sample;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::export;
use crate::models::{Note, NoteId, NotePatch, Space, SpaceId, SpacePatch};
use crate::state::ViewTab;
use crate::storage::{KeyValueStorage, MemoryStorage, STORE_KEY};
use crate::{Error, Result};

/// A store shared between an interactive surface and background tasks
pub type SharedStore = Arc<Mutex<Store>>;

/// The persisted portion of the store state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreSnapshot {
    notes: Vec<Note>,
    spaces: Vec<Space>,
}

/// Owned state container for notes, spaces, and UI selection state
pub struct Store {
    notes: Vec<Note>,
    spaces: Vec<Space>,
    active_note_id: Option<NoteId>,
    active_tab: ViewTab,
    sidebar_open: bool,
    show_assistant_panel: bool,
    storage: Box<dyn KeyValueStorage>,
}

impl Store {
    /// Open a store over the given storage backend, loading any persisted
    /// snapshot. UI state always starts fresh.
    pub fn open(storage: Box<dyn KeyValueStorage>) -> Result<Self> {
        let snapshot = match storage.get(STORE_KEY)? {
            Some(raw) => serde_json::from_str::<StoreSnapshot>(&raw)?,
            None => StoreSnapshot::default(),
        };

        Ok(Self {
            notes: snapshot.notes,
            spaces: snapshot.spaces,
            active_note_id: None,
            active_tab: ViewTab::default(),
            sidebar_open: true,
            show_assistant_panel: false,
            storage,
        })
    }

    /// Open an empty store backed by in-memory storage (useful for testing)
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            notes: Vec::new(),
            spaces: Vec::new(),
            active_note_id: None,
            active_tab: ViewTab::default(),
            sidebar_open: true,
            show_assistant_panel: false,
            storage: Box::new(MemoryStorage::new()),
        }
    }

    /// Wrap this store for sharing with background tasks
    #[must_use]
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    fn persist(&self) {
        let snapshot = StoreSnapshot {
            notes: self.notes.clone(),
            spaces: self.spaces.clone(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(payload) => {
                if let Err(error) = self.storage.set(STORE_KEY, &payload) {
                    tracing::warn!("failed to persist store snapshot: {error}");
                }
            }
            Err(error) => tracing::warn!("failed to serialize store snapshot: {error}"),
        }
    }

    // -----------------------------------------------------------------
    // Notes
    // -----------------------------------------------------------------

    /// Create a new empty note, optionally inside a space, and make it the
    /// active note. The space reference is not validated.
    pub fn create_note(&mut self, space_id: Option<SpaceId>) -> NoteId {
        let note = Note::new(space_id);
        let id = note.id;
        self.notes.insert(0, note);
        self.active_note_id = Some(id);
        self.persist();
        id
    }

    /// Merge a partial update into the note with the given id.
    ///
    /// Unknown ids are surfaced as [`Error::NoteNotFound`].
    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))?;
        note.apply(patch);
        self.persist();
        Ok(())
    }

    /// Delete a note. Clears the active note if it was the one deleted.
    pub fn delete_note(&mut self, id: NoteId) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Err(Error::NoteNotFound(id.to_string()));
        }
        if self.active_note_id == Some(id) {
            self.active_note_id = None;
        }
        self.persist();
        Ok(())
    }

    /// Get a note by id
    #[must_use]
    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// All notes, newest-created first
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Flip a note's starred flag, returning the new value
    pub fn toggle_star(&mut self, id: NoteId) -> Result<bool> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))?;
        note.starred = !note.starred;
        let starred = note.starred;
        self.persist();
        Ok(starred)
    }

    /// Notes belonging to the given space
    #[must_use]
    pub fn notes_by_space(&self, space_id: SpaceId) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| note.space_id == Some(space_id))
            .collect()
    }

    // -----------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------

    /// Replace a note's tag list.
    ///
    /// Tag edits travel outside the note-update path and do not touch the
    /// modification timestamp.
    pub fn set_note_tags(&mut self, id: NoteId, tags: Vec<String>) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))?;
        note.tags = tags;
        self.persist();
        Ok(())
    }

    /// Every tag in use, first-seen order, deduplicated
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        for note in &self.notes {
            for tag in &note.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    /// Add a tag to the active note. Does nothing without an active note or
    /// when the tag is already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let Some(id) = self.active_note_id else {
            return;
        };
        let tag = tag.into();
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };
        if !note.tags.contains(&tag) {
            note.tags.push(tag);
            self.persist();
        }
    }

    /// Remove a tag from the active note. Does nothing without an active note.
    pub fn remove_tag(&mut self, tag: &str) {
        let Some(id) = self.active_note_id else {
            return;
        };
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };
        let before = note.tags.len();
        note.tags.retain(|existing| existing != tag);
        if note.tags.len() != before {
            self.persist();
        }
    }

    // -----------------------------------------------------------------
    // Spaces
    // -----------------------------------------------------------------

    /// Create a new space, appended after the existing ones
    pub fn create_space(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> SpaceId {
        let sort_order = u32::try_from(self.spaces.len()).unwrap_or(u32::MAX);
        let space = Space::new(name, color, icon, sort_order);
        let id = space.id;
        self.spaces.push(space);
        self.persist();
        id
    }

    /// Merge a partial update into the space with the given id
    pub fn update_space(&mut self, id: SpaceId, patch: SpacePatch) -> Result<()> {
        let space = self
            .spaces
            .iter_mut()
            .find(|space| space.id == id)
            .ok_or_else(|| Error::SpaceNotFound(id.to_string()))?;
        space.apply(patch);
        self.persist();
        Ok(())
    }

    /// Delete a space. Member notes are detached (`space_id` cleared), never
    /// deleted.
    pub fn delete_space(&mut self, id: SpaceId) -> Result<()> {
        let before = self.spaces.len();
        self.spaces.retain(|space| space.id != id);
        if self.spaces.len() == before {
            return Err(Error::SpaceNotFound(id.to_string()));
        }
        for note in &mut self.notes {
            if note.space_id == Some(id) {
                note.space_id = None;
            }
        }
        self.persist();
        Ok(())
    }

    /// Get a space by id
    #[must_use]
    pub fn get_space(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.iter().find(|space| space.id == id)
    }

    /// All spaces, in creation order
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    // -----------------------------------------------------------------
    // UI state
    // -----------------------------------------------------------------

    /// Select (or clear) the active note. The id is not validated; a stale
    /// selection simply resolves to no note.
    pub fn set_active_note(&mut self, id: Option<NoteId>) {
        self.active_note_id = id;
    }

    /// Id of the currently active note
    #[must_use]
    pub const fn active_note_id(&self) -> Option<NoteId> {
        self.active_note_id
    }

    /// Resolve the currently active note
    #[must_use]
    pub fn active_note(&self) -> Option<&Note> {
        self.active_note_id.and_then(|id| self.get_note(id))
    }

    pub fn set_active_tab(&mut self, tab: ViewTab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub const fn active_tab(&self) -> ViewTab {
        self.active_tab
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn set_show_assistant_panel(&mut self, show: bool) {
        self.show_assistant_panel = show;
    }

    #[must_use]
    pub const fn show_assistant_panel(&self) -> bool {
        self.show_assistant_panel
    }

    // -----------------------------------------------------------------
    // Export / import
    // -----------------------------------------------------------------

    /// Render the full dataset as a JSON export document
    pub fn export_data(&self) -> Result<String> {
        export::render_snapshot(&self.notes, &self.spaces)
    }

    /// Replace both collections from an export document.
    ///
    /// Returns `false` (leaving the store untouched) when the document does
    /// not carry top-level `notes` and `spaces` arrays. The active note is
    /// cleared on success.
    pub fn import_data(&mut self, json: &str) -> bool {
        match export::parse_import(json) {
            Ok(data) => {
                self.notes = data.notes;
                self.spaces = data.spaces;
                self.active_note_id = None;
                self.persist();
                true
            }
            Err(error) => {
                tracing::warn!("import rejected: {error}");
                false
            }
        }
    }
}
