//! Per-book selection state: which image is chosen at each abstraction level

use serde::{Deserialize, Serialize};

/// Selection record for one book
///
/// The structure is a rigid tree mirroring the book's shape exactly: one
/// slot for the book, one per chapter, one per paragraph. `None` means no
/// image is currently selected for that slot. Wire field names are the
/// service's camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SelectedImages {
    /// Image selected to represent the whole book
    #[serde(rename = "bookSelectedId")]
    pub book_selected_id: Option<u32>,

    /// Per-chapter selections, index-aligned with the book's chapters
    pub chapters: Vec<ChapterSelection>,
}

/// Selection slots for one chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChapterSelection {
    /// Image selected for the chapter itself
    #[serde(rename = "chapterSelectedId")]
    pub chapter_selected_id: Option<u32>,

    /// Per-paragraph selections, index-aligned with the chapter's paragraphs
    #[serde(rename = "paragraphSelectedIds")]
    pub paragraph_selected_ids: Vec<Option<u32>>,
}

impl ChapterSelection {
    /// An all-empty selection for a chapter with `paragraphs` paragraphs
    pub fn empty(paragraphs: usize) -> Self {
        Self {
            chapter_selected_id: None,
            paragraph_selected_ids: vec![None; paragraphs],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let state = SelectedImages {
            book_selected_id: Some(2),
            chapters: vec![ChapterSelection {
                chapter_selected_id: None,
                paragraph_selected_ids: vec![Some(0), None],
            }],
        };

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "bookSelectedId": 2,
                "chapters": [{
                    "chapterSelectedId": null,
                    "paragraphSelectedIds": [0, null],
                }],
            })
        );
    }

    #[test]
    fn test_null_deserializes_as_no_selection() {
        let state: SelectedImages = serde_json::from_value(json!({
            "bookSelectedId": null,
            "chapters": [{
                "chapterSelectedId": 1,
                "paragraphSelectedIds": [null],
            }],
        }))
        .unwrap();

        assert_eq!(state.book_selected_id, None);
        assert_eq!(state.chapters[0].chapter_selected_id, Some(1));
        assert_eq!(state.chapters[0].paragraph_selected_ids, vec![None]);
    }
}
