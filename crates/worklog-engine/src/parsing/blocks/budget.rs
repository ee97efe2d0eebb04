use log::debug;

use crate::blocks::{Block, TRUNCATION_NOTICE};

/// Growing block sequence with a hard cap.
///
/// Once full, further appends are refused and the sequence is marked
/// truncated. [`BlockBudget::finish`] then overwrites the last block with
/// the truncation notice, so a truncated sequence is exactly at the cap.
#[derive(Debug)]
pub struct BlockBudget {
    blocks: Vec<Block>,
    max_blocks: usize,
    truncated: bool,
}

impl BlockBudget {
    pub fn new(max_blocks: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(max_blocks.min(64)),
            max_blocks,
            truncated: false,
        }
    }

    /// Appends `block`, or returns `false` and marks truncation when full.
    pub fn append(&mut self, block: Block) -> bool {
        if self.blocks.len() >= self.max_blocks {
            if !self.truncated {
                debug!("block budget of {} reached", self.max_blocks);
            }
            self.truncated = true;
            return false;
        }
        self.blocks.push(block);
        true
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Consumes the budget, returning the blocks and the truncated flag.
    pub fn finish(mut self) -> (Vec<Block>, bool) {
        if self.truncated
            && let Some(last) = self.blocks.last_mut()
        {
            *last = Block::paragraph(TRUNCATION_NOTICE);
        }
        (self.blocks, self.truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn appends_until_full() {
        let mut budget = BlockBudget::new(2);
        assert!(budget.append(Block::Divider));
        assert!(budget.append(Block::Divider));
        assert!(!budget.is_truncated());
        assert!(!budget.append(Block::Divider));
        assert!(budget.is_truncated());
        assert_eq!(budget.len(), 2);
    }

    #[test]
    fn refused_append_leaves_sequence_untouched() {
        let mut budget = BlockBudget::new(1);
        budget.append(Block::paragraph("kept"));
        budget.append(Block::paragraph("dropped"));
        assert_eq!(budget.len(), 1);
    }

    #[test]
    fn finish_rewrites_last_block_when_truncated() {
        let mut budget = BlockBudget::new(2);
        budget.append(Block::paragraph("one"));
        budget.append(Block::paragraph("two"));
        budget.append(Block::paragraph("three"));

        let (blocks, truncated) = budget.finish();
        assert!(truncated);
        assert_eq!(
            blocks,
            vec![Block::paragraph("one"), Block::paragraph(TRUNCATION_NOTICE)]
        );
    }

    #[test]
    fn finish_keeps_blocks_when_not_truncated() {
        let mut budget = BlockBudget::new(3);
        budget.append(Block::paragraph("one"));

        let (blocks, truncated) = budget.finish();
        assert!(!truncated);
        assert_eq!(blocks, vec![Block::paragraph("one")]);
    }

    #[test]
    fn zero_budget_is_truncated_and_empty() {
        let mut budget = BlockBudget::new(0);
        assert!(!budget.append(Block::Divider));
        let (blocks, truncated) = budget.finish();
        assert!(truncated);
        assert!(blocks.is_empty());
    }
}
