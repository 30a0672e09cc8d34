//! Note model matching the DropNote notes.json document format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note as persisted in the notes.json document.
///
/// Field names follow the on-disk format (camelCase keys). The search core
/// only reads `id`, `title`, `text` and `lastModified`; pin/lock state
/// belongs to the hosting application but round-trips through the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier for the note
    pub id: String,

    /// Note title
    pub title: String,

    /// Note body text
    pub text: String,

    /// Whether the note is pinned in the host UI
    #[serde(default)]
    pub is_pinned: bool,

    /// Whether the note is locked (requires authentication to view)
    #[serde(default)]
    pub is_locked: bool,

    /// When the note was last modified. Older note files may lack this
    /// field; the store backfills it at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Note {
    /// Create a new note with required fields.
    pub fn new(id: String, title: String, text: String) -> Self {
        Self {
            id,
            title,
            text,
            is_pinned: false,
            is_locked: false,
            last_modified: Some(Utc::now()),
        }
    }

    /// Stamp the note as modified now.
    pub fn touch(&mut self) {
        self.last_modified = Some(Utc::now());
    }
}
