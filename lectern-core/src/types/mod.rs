//! Core types shared by every Lectern component

mod book;
mod chapter;
mod metadata;
mod selection;
mod view;

pub use book::Book;
pub use chapter::Chapter;
pub use metadata::BookMetadata;
pub use selection::{ChapterSelection, SelectedImages};
pub use view::{AbstractionLevel, ViewMode};
