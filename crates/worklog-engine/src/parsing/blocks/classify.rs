use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak};

/// Classification of a single line outside a fenced region.
///
/// This is phase 1 of block parsing: each line is classified from its own
/// text alone. Variants are listed in match priority; the first that
/// applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opens a fenced code region; carries the raw info string.
    FenceOpen { info: &'a str },
    /// Whitespace only.
    Blank,
    /// `#` heading with its marker count and unstripped text.
    Heading { markers: usize, text: &'a str },
    ThematicBreak,
    Quote { text: &'a str },
    Bullet { text: &'a str },
    Numbered { text: &'a str },
    /// Anything else: paragraph prose.
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(info) = CodeFence::open_info(line) {
            return LineClass::FenceOpen { info };
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((markers, text)) = Heading::parse(line) {
            return LineClass::Heading { markers, text };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if let Some(text) = BlockQuote::remainder(line) {
            return LineClass::Quote { text };
        }
        if let Some(text) = ListItem::bullet(line) {
            return LineClass::Bullet { text };
        }
        if let Some(text) = ListItem::numbered(line) {
            return LineClass::Numbered { text };
        }
        LineClass::Text
    }
}
