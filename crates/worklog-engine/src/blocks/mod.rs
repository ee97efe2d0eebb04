//! # Workspace Blocks
//!
//! The closed set of structural blocks accepted by the document workspace,
//! plus the rich-text payload every text-bearing block carries.
//!
//! ## Modules
//!
//! - **`rich_text`**: `RichText` and the character-limited chunker
//! - **`language`**: `CodeLanguage` and the fence-info alias table
//! - **`wire`**: serialization into the workspace API's JSON shape
//!
//! ## Key Invariants
//!
//! - Every rich-text segment holds at most [`RICH_TEXT_LIMIT`] characters
//! - A rich-text value is never an empty array
//! - A single request never carries more than [`MAX_BLOCKS`] blocks

pub mod language;
pub mod rich_text;
mod wire;

pub use language::{CodeLanguage, map_code_language};
pub use rich_text::{RichText, split_by_length, truncate_chars};

/// Maximum characters in one rich-text segment.
pub const RICH_TEXT_LIMIT: usize = 1800;

/// Maximum number of child blocks in one request.
pub const MAX_BLOCKS: usize = 100;

/// Maximum characters in a page title or heading.
pub const TITLE_LIMIT: usize = 200;

/// Placeholder used wherever a block would otherwise carry no text.
pub const EMPTY_PLACEHOLDER: &str = "(empty content)";

/// Paragraph written over the last block when output hits the block budget.
pub const TRUNCATION_NOTICE: &str =
    "Content is long and has been truncated. See the local report history for the full text.";

/// Heading rank. The workspace only knows three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Collapses a markdown `#` count onto the three supported ranks.
    ///
    /// One stays `H1`, two stays `H2`, three or more becomes `H3`.
    pub fn from_marker_count(markers: usize) -> Self {
        match markers {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }
}

/// One structural unit of a workspace page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph { text: RichText },
    Heading { level: HeadingLevel, text: RichText },
    Quote { text: RichText },
    BulletedListItem { text: RichText },
    NumberedListItem { text: RichText },
    Code { language: CodeLanguage, text: RichText },
    Divider,
}

impl Block {
    pub fn paragraph(content: &str) -> Self {
        Block::Paragraph {
            text: RichText::new(content),
        }
    }

    pub fn heading(level: HeadingLevel, content: &str) -> Self {
        Block::Heading {
            level,
            text: RichText::new(content),
        }
    }

    pub fn code(language: CodeLanguage, content: &str) -> Self {
        Block::Code {
            language,
            text: RichText::new(content),
        }
    }

    /// The workspace's type discriminator for this block.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { level, .. } => match level {
                HeadingLevel::H1 => "heading_1",
                HeadingLevel::H2 => "heading_2",
                HeadingLevel::H3 => "heading_3",
            },
            Block::Quote { .. } => "quote",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::Code { .. } => "code",
            Block::Divider => "divider",
        }
    }

    /// The rich text carried by this block, `None` for dividers.
    pub fn text(&self) -> Option<&RichText> {
        match self {
            Block::Paragraph { text }
            | Block::Heading { text, .. }
            | Block::Quote { text }
            | Block::BulletedListItem { text }
            | Block::NumberedListItem { text }
            | Block::Code { text, .. } => Some(text),
            Block::Divider => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, HeadingLevel::H1)]
    #[case(2, HeadingLevel::H2)]
    #[case(3, HeadingLevel::H3)]
    #[case(4, HeadingLevel::H3)]
    #[case(6, HeadingLevel::H3)]
    fn heading_levels_collapse_to_three_ranks(#[case] markers: usize, #[case] level: HeadingLevel) {
        assert_eq!(HeadingLevel::from_marker_count(markers), level);
    }

    #[test]
    fn heading_kind_follows_level() {
        assert_eq!(Block::heading(HeadingLevel::H1, "a").kind(), "heading_1");
        assert_eq!(Block::heading(HeadingLevel::H2, "a").kind(), "heading_2");
        assert_eq!(Block::heading(HeadingLevel::H3, "a").kind(), "heading_3");
    }

    #[test]
    fn divider_has_no_text() {
        assert!(Block::Divider.text().is_none());
        assert_eq!(Block::Divider.kind(), "divider");
    }

    #[test]
    fn paragraph_exposes_its_text() {
        let block = Block::paragraph("hello");
        assert_eq!(block.text().map(RichText::plain_text), Some("hello".to_string()));
    }
}
