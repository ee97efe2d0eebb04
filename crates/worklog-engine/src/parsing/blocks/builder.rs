use log::{debug, warn};

use crate::blocks::{
    Block, CodeLanguage, EMPTY_PLACEHOLDER, HeadingLevel, RICH_TEXT_LIMIT, RichText, TITLE_LIMIT,
    map_code_language, split_by_length, truncate_chars,
};
use crate::parsing::inline::strip_inline_markdown;

use super::{
    budget::BlockBudget,
    classify::{LineClass, MarkdownLineClassifier},
    kinds::CodeFence,
};

/// The leaf currently being accumulated. Prose and code are exclusive.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Fence { language: CodeLanguage, lines: Vec<String> },
}

/// Line-driven block construction.
///
/// One builder per parse; it owns the output budget and the pending leaf,
/// and is consumed by [`BlockBuilder::finish`].
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    budget: BlockBudget,
    leaf: LeafState,
}

/// Output of a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlocks {
    pub blocks: Vec<Block>,
    /// Whether the block budget cut the document short.
    pub truncated: bool,
}

impl BlockBuilder {
    pub fn new(max_blocks: usize) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            budget: BlockBudget::new(max_blocks),
            leaf: LeafState::None,
        }
    }

    /// Consumes one line. Returns `false` once the budget is exhausted; the
    /// caller must stop feeding lines at that point.
    pub fn push(&mut self, line: &str) -> bool {
        if self.budget.is_truncated() {
            return false;
        }

        if self.in_fence() {
            if CodeFence::closes(line) {
                return self.flush_fence();
            }
            if let LeafState::Fence { lines, .. } = &mut self.leaf {
                lines.push(line.to_string());
            }
            return true;
        }

        match self.classifier.classify(line) {
            LineClass::FenceOpen { info } => {
                if !self.flush_paragraph() {
                    return false;
                }
                self.leaf = LeafState::Fence {
                    language: map_code_language(info),
                    lines: Vec::new(),
                };
                true
            }
            LineClass::Blank => self.flush_paragraph(),
            LineClass::Heading { markers, text } => {
                let stripped = strip_inline_markdown(text);
                let block = Block::heading(
                    HeadingLevel::from_marker_count(markers),
                    truncate_chars(&stripped, TITLE_LIMIT),
                );
                self.flush_paragraph() && self.budget.append(block)
            }
            LineClass::ThematicBreak => self.flush_paragraph() && self.budget.append(Block::Divider),
            LineClass::Quote { text } => {
                let block = Block::Quote {
                    text: RichText::new(&strip_inline_markdown(text)),
                };
                self.flush_paragraph() && self.budget.append(block)
            }
            LineClass::Bullet { text } => {
                let block = Block::BulletedListItem {
                    text: RichText::new(&strip_inline_markdown(text)),
                };
                self.flush_paragraph() && self.budget.append(block)
            }
            LineClass::Numbered { text } => {
                let block = Block::NumberedListItem {
                    text: RichText::new(&strip_inline_markdown(text)),
                };
                self.flush_paragraph() && self.budget.append(block)
            }
            LineClass::Text => {
                match &mut self.leaf {
                    LeafState::Paragraph { lines } => lines.push(line.to_string()),
                    _ => {
                        self.leaf = LeafState::Paragraph {
                            lines: vec![line.to_string()],
                        }
                    }
                }
                true
            }
        }
    }

    pub fn finish(mut self) -> ParsedBlocks {
        if !self.budget.is_truncated() {
            // EOF flush; an unterminated fence still becomes code
            if self.in_fence() {
                debug!("unterminated code fence at end of input");
                // the document's final newline is not part of the code
                if let LeafState::Fence { lines, .. } = &mut self.leaf
                    && lines.last().is_some_and(|l| l.is_empty())
                {
                    lines.pop();
                }
                self.flush_fence();
            }
            self.flush_paragraph();
        }

        if self.budget.is_empty() {
            self.budget.append(Block::paragraph(EMPTY_PLACEHOLDER));
        }

        let (blocks, truncated) = self.budget.finish();
        if truncated {
            warn!("markdown truncated to {} blocks", blocks.len());
        }
        ParsedBlocks { blocks, truncated }
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn flush_paragraph(&mut self) -> bool {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::Paragraph { lines } => {
                let text = strip_inline_markdown(&lines.join("\n"));
                if text.is_empty() {
                    return true;
                }
                self.budget.append(Block::paragraph(&text))
            }
            other => {
                self.leaf = other; // put back non-paragraph leaf (e.g. fence)
                true
            }
        }
    }

    fn flush_fence(&mut self) -> bool {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::Fence { language, lines } => {
                for block in code_blocks(&lines.join("\n"), language) {
                    if !self.budget.append(block) {
                        return false;
                    }
                }
                true
            }
            other => {
                self.leaf = other;
                true
            }
        }
    }
}

/// Splits `code` into consecutive code blocks sharing `language`.
///
/// Content is kept verbatim. Whitespace-only content yields a single
/// placeholder block so an empty fence is still visible.
pub fn code_blocks(code: &str, language: CodeLanguage) -> Vec<Block> {
    if code.trim().is_empty() {
        return vec![Block::code(language, EMPTY_PLACEHOLDER)];
    }
    split_by_length(code, RICH_TEXT_LIMIT)
        .into_iter()
        .map(|chunk| Block::Code {
            language: language.clone(),
            text: RichText::new(&chunk),
        })
        .collect()
}
