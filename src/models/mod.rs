//! Data models for DropNote entities.

pub mod note;

pub use note::Note;
