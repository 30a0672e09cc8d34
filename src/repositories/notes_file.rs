//! JSON file note store.
//!
//! Persists the note collection as a single JSON array, matching the desktop
//! application's notes.json document. Loading backfills missing
//! last-modified timestamps and re-persists the collection, so timestamp
//! repair stays a storage concern rather than leaking into index builds.

use crate::error::StoreResult;
use crate::models::Note;
use crate::repositories::NoteStore;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Note store backed by a single JSON file.
pub struct JsonNoteStore {
    path: PathBuf,
}

impl JsonNoteStore {
    /// Create a store over the given notes file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stamp any note missing a last-modified timestamp with "now".
    ///
    /// Returns true if any note was stamped, in which case the collection
    /// should be re-persisted.
    fn backfill_timestamps(notes: &mut [Note]) -> bool {
        let now = Utc::now();
        let mut changed = false;
        for note in notes.iter_mut() {
            if note.last_modified.is_none() {
                note.last_modified = Some(now);
                changed = true;
            }
        }
        changed
    }
}

impl NoteStore for JsonNoteStore {
    fn load(&self) -> StoreResult<Vec<Note>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Notes file does not exist, treating as empty");
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;
        let mut notes: Vec<Note> = serde_json::from_str(&data)?;

        if Self::backfill_timestamps(&mut notes) {
            // Best effort: a failed re-persist leaves the loaded collection
            // intact and only warns.
            if let Err(e) = self.save(&notes) {
                warn!(error = %e, "Failed to persist backfilled note timestamps");
            }
        }

        debug!(count = notes.len(), "Loaded notes");
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
