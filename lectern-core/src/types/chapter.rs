//! Chapter type representing a single summarized chapter of a book

use serde::{Deserialize, Serialize};

/// A single chapter with its paragraphs and per-paragraph summaries
///
/// `paragraph_summaries` is index-aligned with `paragraphs`:
/// `paragraph_summaries[i]` describes `paragraphs[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    /// Source-defined chapter ordinal, unique and increasing within a book
    pub num: u32,

    /// Chapter title
    pub title: String,

    /// Paragraph texts in reading order
    pub paragraphs: Vec<String>,

    /// One summary per paragraph, index-aligned
    pub paragraph_summaries: Vec<String>,

    /// Synopsis at chapter granularity
    pub chapter_summary: String,
}

impl Chapter {
    /// Create a new chapter with no paragraphs
    pub fn new(num: u32, title: impl Into<String>, chapter_summary: impl Into<String>) -> Self {
        Self {
            num,
            title: title.into(),
            paragraphs: Vec::new(),
            paragraph_summaries: Vec::new(),
            chapter_summary: chapter_summary.into(),
        }
    }

    /// Add a paragraph together with its summary, keeping the two
    /// sequences aligned
    pub fn add_paragraph(&mut self, text: impl Into<String>, summary: impl Into<String>) {
        self.paragraphs.push(text.into());
        self.paragraph_summaries.push(summary.into());
    }
}
