//! Index construction for note search.
//!
//! The index is a flat list of [`IndexedNote`] entries rebuilt wholesale from
//! the current note collection. Each entry carries pre-lowercased copies of
//! the searchable fields so that query-time containment checks use the same
//! case fold as index build.

use crate::models::Note;
use chrono::{DateTime, Utc};

/// A note prepared for querying.
///
/// Invariant: `title_lowercased` and `text_lowercased` are always the
/// `str::to_lowercase` equivalents of `title`/`text` as of the index build;
/// they are never mutated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedNote {
    /// Identifier copied from the source note
    pub id: String,

    /// Original note title
    pub title: String,

    /// Original note body
    pub text: String,

    /// Resolved last-modified timestamp. Never missing: notes without one
    /// are stamped with the index build time.
    pub last_modified: DateTime<Utc>,

    /// Lowercased title for containment checks
    pub title_lowercased: String,

    /// Lowercased body for containment checks
    pub text_lowercased: String,
}

/// Build a fresh index from a note collection.
///
/// One entry per input note, in input order, with no deduplication. `now` is
/// used to resolve missing timestamps, which makes rebuilds deterministic in
/// tests; callers that want wall-clock behavior pass `Utc::now()`.
pub fn build_index(notes: &[Note], now: DateTime<Utc>) -> Vec<IndexedNote> {
    notes
        .iter()
        .map(|note| IndexedNote {
            id: note.id.clone(),
            title: note.title.clone(),
            text: note.text.clone(),
            last_modified: note.last_modified.unwrap_or(now),
            title_lowercased: note.title.to_lowercase(),
            text_lowercased: note.text.to_lowercase(),
        })
        .collect()
}
