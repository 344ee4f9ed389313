//! Selection-state model
//!
//! Operations over [`SelectedImages`] values. All of them are pure: they
//! take the state by reference and return a new value, so a view can hold
//! the previous state for undo or comparison. Because the book content and
//! the selection record are fetched independently, a consumer must
//! [`reconcile`](SelectedImages::reconcile) the record against the current
//! book before indexing into it.

use crate::error::SelectionError;
use crate::types::{AbstractionLevel, Book, ChapterSelection, SelectedImages};

/// Address of one selection slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The book-level slot
    Book,
    /// A chapter-level slot, by chapter index
    Chapter { chapter: usize },
    /// A paragraph-level slot, by chapter and paragraph index
    Paragraph { chapter: usize, paragraph: usize },
}

impl Slot {
    /// The abstraction level this slot addresses
    pub fn level(self) -> AbstractionLevel {
        match self {
            Slot::Book => AbstractionLevel::Book,
            Slot::Chapter { .. } => AbstractionLevel::Chapter,
            Slot::Paragraph { .. } => AbstractionLevel::Paragraph,
        }
    }
}

impl SelectedImages {
    /// Build an all-empty selection state mirroring `book`'s shape: one
    /// entry per chapter, one sub-entry per paragraph, every slot `None`.
    ///
    /// This is the canonical default when the service has no record for
    /// the book yet.
    pub fn empty_for(book: &Book) -> Self {
        Self {
            book_selected_id: None,
            chapters: book
                .chapters
                .iter()
                .map(|c| ChapterSelection::empty(c.paragraphs.len()))
                .collect(),
        }
    }

    /// Read the selection at `slot`, or fail if the slot is outside the
    /// state's current shape
    pub fn selection(&self, slot: Slot) -> Result<Option<u32>, SelectionError> {
        match slot {
            Slot::Book => Ok(self.book_selected_id),
            Slot::Chapter { chapter } => Ok(self.chapter(chapter)?.chapter_selected_id),
            Slot::Paragraph { chapter, paragraph } => {
                let entry = self.chapter(chapter)?;
                entry
                    .paragraph_selected_ids
                    .get(paragraph)
                    .copied()
                    .ok_or(SelectionError::ParagraphOutOfRange {
                        chapter,
                        paragraph,
                        len: entry.paragraph_selected_ids.len(),
                    })
            }
        }
    }

    /// Return a new state with `image_id` selected at `slot`
    pub fn select_at(&self, slot: Slot, image_id: u32) -> Result<Self, SelectionError> {
        self.set(slot, Some(image_id))
    }

    /// Return a new state with the slot at `slot` reset to no selection
    pub fn clear_at(&self, slot: Slot) -> Result<Self, SelectionError> {
        self.set(slot, None)
    }

    /// Reshape this state to match `book`, keeping every selection whose
    /// chapter/paragraph position still exists and defaulting newly
    /// introduced slots to `None`.
    ///
    /// Idempotent: reconciling an already-matching state is a no-op.
    pub fn reconcile(&self, book: &Book) -> Self {
        let chapters = book
            .chapters
            .iter()
            .enumerate()
            .map(|(i, chapter)| {
                let old = self.chapters.get(i);
                let paragraph_selected_ids = (0..chapter.paragraphs.len())
                    .map(|p| {
                        old.and_then(|o| o.paragraph_selected_ids.get(p))
                            .copied()
                            .flatten()
                    })
                    .collect();

                ChapterSelection {
                    chapter_selected_id: old.and_then(|o| o.chapter_selected_id),
                    paragraph_selected_ids,
                }
            })
            .collect();

        Self {
            book_selected_id: self.book_selected_id,
            chapters,
        }
    }

    fn set(&self, slot: Slot, value: Option<u32>) -> Result<Self, SelectionError> {
        // Bounds-check first; errors must not produce a reshaped state.
        self.selection(slot)?;

        let mut next = self.clone();
        match slot {
            Slot::Book => next.book_selected_id = value,
            Slot::Chapter { chapter } => next.chapters[chapter].chapter_selected_id = value,
            Slot::Paragraph { chapter, paragraph } => {
                next.chapters[chapter].paragraph_selected_ids[paragraph] = value;
            }
        }
        Ok(next)
    }

    fn chapter(&self, chapter: usize) -> Result<&ChapterSelection, SelectionError> {
        self.chapters
            .get(chapter)
            .ok_or(SelectionError::ChapterOutOfRange {
                chapter,
                len: self.chapters.len(),
            })
    }
}
