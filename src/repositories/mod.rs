//! Note storage layer.
//!
//! The search core never touches persistence directly; it consumes whatever
//! note collection a [`NoteStore`] hands it. The JSON file store mirrors the
//! desktop application's notes.json document.

mod notes_file;
mod traits;

pub use notes_file::JsonNoteStore;
pub use traits::NoteStore;
