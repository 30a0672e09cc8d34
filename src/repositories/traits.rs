use crate::error::StoreResult;
use crate::models::Note;

/// Repository for the persisted note collection.
///
/// Provides abstraction over note storage, enabling different
/// implementations (JSON file, in-memory test store).
pub trait NoteStore: Send + Sync {
    /// Load the full note collection.
    ///
    /// A store with no persisted data yet returns an empty list, not an
    /// error. Errors signal unreadable or unparsable data; callers that
    /// feed the search index are expected to degrade to an empty index
    /// rather than propagate them.
    fn load(&self) -> StoreResult<Vec<Note>>;

    /// Persist the full note collection, replacing previous contents.
    fn save(&self, notes: &[Note]) -> StoreResult<()>;
}
