//! Book metadata as extracted from the source EPUB by the service

use serde::{Deserialize, Serialize};

/// Metadata for a book, served separately from its summarized content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookMetadata {
    /// Book title
    pub title: String,

    /// Author, when the source file carried one
    pub creator: Option<String>,
}
