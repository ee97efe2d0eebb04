pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::blocks::MAX_BLOCKS;

use blocks::BlockBuilder;
pub use blocks::{ParsedBlocks, code_blocks};
pub use inline::strip_inline_markdown;

/// Converts markdown into at most [`MAX_BLOCKS`] workspace blocks.
///
/// Never fails: malformed markdown degrades to paragraphs, and an empty
/// document yields a single placeholder paragraph.
pub fn parse_markdown(markdown: &str) -> ParsedBlocks {
    parse_markdown_with_budget(markdown, MAX_BLOCKS)
}

/// Like [`parse_markdown`] with a caller-chosen block cap.
///
/// A cap of zero is treated as one so the output is never empty.
pub fn parse_markdown_with_budget(markdown: &str, max_blocks: usize) -> ParsedBlocks {
    let normalized = markdown.replace("\r\n", "\n");
    let mut builder = BlockBuilder::new(max_blocks.max(1));

    for line in normalized.split('\n') {
        if !builder.push(line) {
            break;
        }
    }

    builder.finish()
}
