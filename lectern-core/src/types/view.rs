//! Display-request vocabulary shared with the view layer

use serde::{Deserialize, Serialize};

/// Granularity at which a summary, image, or selection applies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbstractionLevel {
    Book,
    Chapter,
    Paragraph,
}

/// What representation a consumer wants rendered; never persisted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[serde(rename = "image")]
    Image,

    #[serde(rename = "text")]
    Text,

    #[default]
    #[serde(rename = "image+text")]
    ImageAndText,
}

impl ViewMode {
    /// Whether this mode renders paragraph text
    pub fn shows_text(self) -> bool {
        matches!(self, ViewMode::Text | ViewMode::ImageAndText)
    }

    /// Whether this mode renders images
    pub fn shows_images(self) -> bool {
        matches!(self, ViewMode::Image | ViewMode::ImageAndText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(
            serde_json::to_string(&AbstractionLevel::Paragraph).unwrap(),
            "\"paragraph\""
        );
        assert_eq!(
            serde_json::to_string(&ViewMode::ImageAndText).unwrap(),
            "\"image+text\""
        );
    }
}
