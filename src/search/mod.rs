//! In-memory note search: index construction and query evaluation.
//!
//! The index is rebuilt wholesale from the current note collection and
//! queried read-only. Scoring combines title-match tiers, body occurrence
//! counts and a linearly decaying recency bonus.

pub mod index;
pub mod query;

pub use index::{build_index, IndexedNote};
pub use query::{find_highlight_ranges, get_preview, search_index, SearchResult};
