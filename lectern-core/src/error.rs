//! Error types for Lectern Core

use thiserror::Error;

/// Errors raised when a book payload violates its structural invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("book has no chapters")]
    NoChapters,

    #[error("chapter {index}: expected {paragraphs} paragraph summaries, found {summaries}")]
    SummaryCountMismatch {
        index: usize,
        paragraphs: usize,
        summaries: usize,
    },

    #[error("chapter {index}: number {num} does not increase over the previous chapter")]
    NonIncreasingChapterNum { index: usize, num: u32 },
}

/// Errors raised when a selection operation addresses a slot outside
/// the state's current shape
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("chapter index {chapter} out of range (state has {len} chapters)")]
    ChapterOutOfRange { chapter: usize, len: usize },

    #[error("paragraph index {paragraph} out of range (chapter {chapter} has {len} paragraphs)")]
    ParagraphOutOfRange {
        chapter: usize,
        paragraph: usize,
        len: usize,
    },
}
