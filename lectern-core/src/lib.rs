//! Lectern Core Library
//!
//! This crate provides the domain types and selection-state model for the
//! Lectern book-reading client. Books arrive from the service as summarized
//! content (chapters, paragraphs, summaries at every abstraction level);
//! a per-book [`SelectedImages`] record tracks which generated image the
//! reader has chosen for each of those units.

pub mod error;
pub mod filename;
pub mod selection;
pub mod types;

pub use error::{SelectionError, ShapeError};
pub use filename::to_safe_filename;
pub use selection::Slot;
pub use types::{
    AbstractionLevel, Book, BookMetadata, Chapter, ChapterSelection, SelectedImages, ViewMode,
};
