//! DropNote Search - the in-memory search and indexing engine behind the
//! DropNote notes application.
//!
//! The engine rebuilds a flat in-memory index from the full note collection
//! on demand and answers free-text queries with ranked, capped results, each
//! carrying a relevance score, a contextual preview and highlight ranges for
//! matched substrings.
//!
//! # Architecture
//!
//! - **models**: Data structures for persisted notes
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Note storage (JSON file store)
//! - **search**: Index construction and query evaluation (the core)
//! - **services**: The index-owning search service

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use models::Note;
pub use repositories::{JsonNoteStore, NoteStore};
pub use search::{build_index, find_highlight_ranges, get_preview, IndexedNote, SearchResult};
pub use services::NoteSearchService;
