//! Note search service.
//!
//! Owns the index snapshot and exposes `rebuild`/`search` as its only entry
//! points. The snapshot is swapped wholesale behind an `RwLock<Arc<_>>`, so
//! a query running concurrently with a rebuild observes either the old or
//! the new index in full, never a partially built one.

use crate::models::Note;
use crate::repositories::NoteStore;
use crate::search::{build_index, search_index, IndexedNote, SearchResult};
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Service owning the in-memory note search index.
pub struct NoteSearchService {
    index: RwLock<Arc<Vec<IndexedNote>>>,
}

impl NoteSearchService {
    /// Create a service with an empty index.
    pub fn new() -> Self {
        Self {
            index: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Rebuild the index from a note snapshot.
    ///
    /// Missing last-modified timestamps are resolved to the current time;
    /// the stamped value lives only in the index, never in the source notes.
    pub fn rebuild(&self, notes: &[Note]) {
        self.rebuild_at(notes, Utc::now());
    }

    /// Rebuild the index with an explicit timestamp-resolution time.
    pub fn rebuild_at(&self, notes: &[Note], now: DateTime<Utc>) {
        let fresh = Arc::new(build_index(notes, now));
        debug!(count = fresh.len(), "Rebuilt search index");
        self.swap_index(fresh);
    }

    /// Rebuild the index from the note store.
    ///
    /// Unreadable or unparsable store data degrades the index to empty with
    /// a warning; the caller never sees an error from this path.
    pub fn rebuild_from_store(&self, store: &dyn NoteStore) {
        match store.load() {
            Ok(notes) => self.rebuild(&notes),
            Err(e) => {
                warn!(error = %e, "Failed to load notes, degrading to empty index");
                self.swap_index(Arc::new(Vec::new()));
            }
        }
    }

    /// Search the current index snapshot.
    ///
    /// An empty or whitespace-only query lists the most recently modified
    /// notes. Never fails: an empty index simply yields no results.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        self.search_at(query, limit, Utc::now())
    }

    /// Search with an explicit "now" for deterministic recency scoring.
    pub fn search_at(&self, query: &str, limit: usize, now: DateTime<Utc>) -> Vec<SearchResult> {
        let snapshot = self.snapshot();
        search_index(&snapshot, query, limit, now)
    }

    /// Number of entries in the current index.
    pub fn index_len(&self) -> usize {
        self.snapshot().len()
    }

    fn swap_index(&self, fresh: Arc<Vec<IndexedNote>>) {
        if let Ok(mut guard) = self.index.write() {
            *guard = fresh;
        }
    }

    fn snapshot(&self) -> Arc<Vec<IndexedNote>> {
        match self.index.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(_) => Arc::new(Vec::new()),
        }
    }
}

impl Default for NoteSearchService {
    fn default() -> Self {
        Self::new()
    }
}
