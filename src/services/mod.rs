//! Application service layer.
//!
//! Services own long-lived state and orchestrate the search core and the
//! storage layer. [`NoteSearchService`] is the single owner of the index
//! snapshot; callers only request rebuilds or issue read-only queries.

mod search_service;

pub use search_service::NoteSearchService;
