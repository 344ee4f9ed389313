//! The main Book type - summarized content at every abstraction level

use super::Chapter;
use crate::error::ShapeError;
use serde::{Deserialize, Serialize};

/// A summarized book as served by the reading service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Ordered list of chapters (reading order)
    pub chapters: Vec<Chapter>,

    /// Synopsis at book granularity
    pub book_summary: String,
}

impl Book {
    /// Create a new book with the given title and summary
    pub fn new(title: impl Into<String>, book_summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            chapters: Vec::new(),
            book_summary: book_summary.into(),
        }
    }

    /// Add a chapter to the book
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Check the structural invariants of a well-formed book: at least one
    /// chapter, strictly increasing chapter numbers, and one paragraph
    /// summary per paragraph in every chapter.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.chapters.is_empty() {
            return Err(ShapeError::NoChapters);
        }

        let mut prev_num = None;
        for (index, chapter) in self.chapters.iter().enumerate() {
            if chapter.paragraph_summaries.len() != chapter.paragraphs.len() {
                return Err(ShapeError::SummaryCountMismatch {
                    index,
                    paragraphs: chapter.paragraphs.len(),
                    summaries: chapter.paragraph_summaries.len(),
                });
            }

            if let Some(prev) = prev_num {
                if chapter.num <= prev {
                    return Err(ShapeError::NonIncreasingChapterNum {
                        index,
                        num: chapter.num,
                    });
                }
            }
            prev_num = Some(chapter.num);
        }

        Ok(())
    }
}
