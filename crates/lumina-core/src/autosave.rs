//! Debounced editor autosave.
//!
//! Tracks one open editor's draft against the stored note and drives the
//! save-status cycle `saved -> unsaved -> saving -> saved | error`. Timer
//! chains are cancelled by a generation counter: every edit bumps the
//! generation, and a chain only advances while its generation is still
//! current, so rapid edits coalesce into a single write carrying the latest
//! content.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::models::{NoteId, NotePatch};
use crate::store::SharedStore;
use crate::{Error, Result};

/// Save-status of an open editor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SaveStatus {
    /// Draft matches the stored note
    #[default]
    Saved,
    /// Draft has diverged; a debounce chain is pending
    Unsaved,
    /// The write is in flight
    Saving,
    /// The last write failed; the draft is preserved for retry
    Error,
}

/// Write-side of the autosave engine, injectable for tests
pub trait SaveTarget: Send + Sync + 'static {
    /// Current stored content for the note, if it exists
    fn load(&self, id: NoteId) -> Option<String>;

    /// Write new content for the note
    fn save(&self, id: NoteId, content: &str) -> Result<()>;
}

impl SaveTarget for SharedStore {
    fn load(&self, id: NoteId) -> Option<String> {
        let store = self.lock().unwrap_or_else(PoisonError::into_inner);
        store.get_note(id).map(|note| note.content.clone())
    }

    fn save(&self, id: NoteId, content: &str) -> Result<()> {
        let mut store = self.lock().unwrap_or_else(PoisonError::into_inner);
        store.update_note(id, NotePatch::new().content(content))
    }
}

/// Timer configuration for the autosave chain
#[derive(Clone, Copy, Debug)]
pub struct AutosaveConfig {
    /// Idle time after the last edit before a save starts
    pub debounce: Duration,
    /// Write latency between `Saving` and the final status
    pub write_delay: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            write_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug)]
struct EditorState {
    status: SaveStatus,
    draft: String,
    persisted: String,
    generation: u64,
    last_error: Option<String>,
}

struct AutosaveInner<T: SaveTarget> {
    target: T,
    note_id: NoteId,
    config: AutosaveConfig,
    state: Mutex<EditorState>,
}

/// Autosave engine for a single open editor
pub struct Autosaver<T: SaveTarget> {
    inner: Arc<AutosaveInner<T>>,
}

impl<T: SaveTarget> Clone for Autosaver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: SaveTarget> Autosaver<T> {
    /// Open an autosaver for a note with default timings
    pub fn for_note(target: T, note_id: NoteId) -> Result<Self> {
        Self::with_config(target, note_id, AutosaveConfig::default())
    }

    /// Open an autosaver for a note with explicit timings
    pub fn with_config(target: T, note_id: NoteId, config: AutosaveConfig) -> Result<Self> {
        let persisted = target
            .load(note_id)
            .ok_or_else(|| Error::NoteNotFound(note_id.to_string()))?;

        Ok(Self {
            inner: Arc::new(AutosaveInner {
                target,
                note_id,
                config,
                state: Mutex::new(EditorState {
                    status: SaveStatus::Saved,
                    draft: persisted.clone(),
                    persisted,
                    generation: 0,
                    last_error: None,
                }),
            }),
        })
    }

    /// Current save status
    #[must_use]
    pub fn status(&self) -> SaveStatus {
        self.inner.lock_state().status
    }

    /// Current local draft
    #[must_use]
    pub fn draft(&self) -> String {
        self.inner.lock_state().draft.clone()
    }

    /// Message from the most recent failed write, if any
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.inner.lock_state().last_error.clone()
    }

    /// Record a local edit and restart the debounce chain.
    ///
    /// Content equal to the stored note short-circuits back to `Saved`;
    /// otherwise the status becomes `Unsaved` and a new chain is scheduled,
    /// cancelling any pending one. Must be called from within a tokio
    /// runtime.
    pub fn edit(&self, content: impl Into<String>) {
        let content = content.into();
        let generation = {
            let mut state = self.inner.lock_state();
            state.generation += 1;
            state.draft.clone_from(&content);
            if content == state.persisted {
                state.status = SaveStatus::Saved;
                return;
            }
            state.status = SaveStatus::Unsaved;
            state.generation
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.config.debounce).await;
            if !inner.begin_save(generation) {
                return;
            }
            tokio::time::sleep(inner.config.write_delay).await;
            let _ = inner.commit_save(generation, &content);
        });
    }

    /// Save the current draft immediately (editor blur / save shortcut),
    /// cancelling any pending chain.
    pub fn flush(&self) -> Result<()> {
        let (generation, content) = {
            let mut state = self.inner.lock_state();
            state.generation += 1;
            if state.draft == state.persisted {
                state.status = SaveStatus::Saved;
                return Ok(());
            }
            state.status = SaveStatus::Saving;
            (state.generation, state.draft.clone())
        };
        self.inner.commit_save(generation, &content)
    }

    /// Re-attempt the last failed write with the preserved draft
    pub fn retry(&self) -> Result<()> {
        self.flush()
    }
}

impl<T: SaveTarget> AutosaveInner<T> {
    fn lock_state(&self) -> MutexGuard<'_, EditorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Transition to `Saving` if this chain is still current
    fn begin_save(&self, generation: u64) -> bool {
        let mut state = self.lock_state();
        if state.generation != generation {
            return false;
        }
        state.status = SaveStatus::Saving;
        true
    }

    /// Perform the write and record the outcome.
    ///
    /// The generation is checked on both sides of the write so a superseded
    /// chain neither writes nor clobbers the status of its successor.
    fn commit_save(&self, generation: u64, content: &str) -> Result<()> {
        if self.lock_state().generation != generation {
            return Ok(());
        }

        let result = self.target.save(self.note_id, content);

        let mut state = self.lock_state();
        if state.generation != generation {
            return Ok(());
        }
        match result {
            Ok(()) => {
                state.status = SaveStatus::Saved;
                state.persisted = content.to_string();
                state.last_error = None;
                tracing::debug!("auto-saved note {}", self.note_id);
                Ok(())
            }
            Err(error) => {
                state.status = SaveStatus::Error;
                state.last_error = Some(error.to_string());
                tracing::error!("failed to save note {}: {error}", self.note_id);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct RecordingTarget {
        saves: Mutex<Vec<String>>,
        fail: AtomicBool,
    }

    impl RecordingTarget {
        fn saves(&self) -> Vec<String> {
            self.saves
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl SaveTarget for Arc<RecordingTarget> {
        fn load(&self, _id: NoteId) -> Option<String> {
            Some(String::new())
        }

        fn save(&self, _id: NoteId, content: &str) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(Error::Storage("simulated write failure".into()));
            }
            self.saves
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(content.to_string());
            Ok(())
        }
    }

    fn fast_config() -> AutosaveConfig {
        AutosaveConfig {
            debounce: Duration::from_millis(25),
            write_delay: Duration::from_millis(10),
        }
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn rapid_edits_coalesce_into_one_save() {
        let target = Arc::new(RecordingTarget::default());
        let saver =
            Autosaver::with_config(Arc::clone(&target), NoteId::new(), fast_config()).unwrap();

        saver.edit("H");
        saver.edit("He");
        saver.edit("Hello");
        assert_eq!(saver.status(), SaveStatus::Unsaved);

        settle().await;
        assert_eq!(saver.status(), SaveStatus::Saved);
        assert_eq!(target.saves(), vec!["Hello".to_string()]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn edit_matching_stored_content_short_circuits() {
        let target = Arc::new(RecordingTarget::default());
        let saver =
            Autosaver::with_config(Arc::clone(&target), NoteId::new(), fast_config()).unwrap();

        saver.edit("");
        assert_eq!(saver.status(), SaveStatus::Saved);

        settle().await;
        assert!(target.saves().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn status_passes_through_saving() {
        let target = Arc::new(RecordingTarget::default());
        let config = AutosaveConfig {
            debounce: Duration::from_millis(10),
            write_delay: Duration::from_millis(300),
        };
        let saver = Autosaver::with_config(Arc::clone(&target), NoteId::new(), config).unwrap();

        saver.edit("draft");
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(saver.status(), SaveStatus::Saving);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(saver.status(), SaveStatus::Saved);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_save_preserves_draft_and_supports_retry() {
        let target = Arc::new(RecordingTarget::default());
        target.fail.store(true, Ordering::SeqCst);
        let saver =
            Autosaver::with_config(Arc::clone(&target), NoteId::new(), fast_config()).unwrap();

        saver.edit("important draft");
        settle().await;

        assert_eq!(saver.status(), SaveStatus::Error);
        assert_eq!(saver.draft(), "important draft");
        assert!(saver.last_error().unwrap().contains("simulated"));

        target.fail.store(false, Ordering::SeqCst);
        saver.retry().unwrap();
        assert_eq!(saver.status(), SaveStatus::Saved);
        assert_eq!(target.saves(), vec!["important draft".to_string()]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn flush_saves_immediately_and_cancels_pending_chain() {
        let target = Arc::new(RecordingTarget::default());
        let saver =
            Autosaver::with_config(Arc::clone(&target), NoteId::new(), fast_config()).unwrap();

        saver.edit("typed");
        saver.flush().unwrap();
        assert_eq!(saver.status(), SaveStatus::Saved);
        assert_eq!(target.saves(), vec!["typed".to_string()]);

        // The debounce chain from the edit must not fire a second write.
        settle().await;
        assert_eq!(target.saves(), vec!["typed".to_string()]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn flush_without_divergence_is_a_no_op() {
        let target = Arc::new(RecordingTarget::default());
        let saver =
            Autosaver::with_config(Arc::clone(&target), NoteId::new(), fast_config()).unwrap();

        saver.flush().unwrap();
        assert_eq!(saver.status(), SaveStatus::Saved);
        assert!(target.saves().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn second_burst_after_save_fires_again() {
        let target = Arc::new(RecordingTarget::default());
        let saver =
            Autosaver::with_config(Arc::clone(&target), NoteId::new(), fast_config()).unwrap();

        saver.edit("first");
        settle().await;
        saver.edit("second");
        assert_eq!(saver.status(), SaveStatus::Unsaved);
        settle().await;

        assert_eq!(
            target.saves(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn store_backed_autosave_updates_the_note() {
        let store = Store::in_memory().into_shared();
        let note_id = store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .create_note(None);

        let saver = Autosaver::with_config(Arc::clone(&store), note_id, fast_config()).unwrap();
        saver.edit("Hello");
        settle().await;

        assert_eq!(saver.status(), SaveStatus::Saved);
        let store = store.lock().unwrap_or_else(PoisonError::into_inner);
        let note = store.get_note(note_id).unwrap();
        assert_eq!(note.content, "Hello");
        assert_eq!(note.preview, "Hello...");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn deleting_the_note_surfaces_a_save_error() {
        let store = Store::in_memory().into_shared();
        let note_id = store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .create_note(None);

        let saver = Autosaver::with_config(Arc::clone(&store), note_id, fast_config()).unwrap();
        store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .delete_note(note_id)
            .unwrap();

        saver.edit("orphaned draft");
        settle().await;

        assert_eq!(saver.status(), SaveStatus::Error);
        assert_eq!(saver.draft(), "orphaned draft");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn autosaver_requires_an_existing_note() {
        let store = Store::in_memory().into_shared();
        let error = Autosaver::for_note(store, NoteId::new()).err();
        assert!(matches!(error, Some(Error::NoteNotFound(_))));
    }
}
