//! The stack of currently-open blocks.
//!
//! Frames are pushed in the order statements are read and popped purely by
//! comparing the current line's indentation against the top frame, so the
//! stack reflects lexical nesting order, not sorted indentation.

use super::types::BlockKeyword;

/// One currently-open block: the indentation of its opening statement and
/// the keyword that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFrame {
    pub indent: usize,
    pub keyword: BlockKeyword,
}

/// LIFO of open blocks. Empty at the start of a rewrite and again after the
/// final unwind.
#[derive(Debug, Default)]
pub struct BlockStack {
    frames: Vec<BlockFrame>,
}

impl BlockStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly-opened block.
    pub fn push(&mut self, indent: usize, keyword: BlockKeyword) {
        self.frames.push(BlockFrame { indent, keyword });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Pop the top frame if it was opened by `keyword`, without emitting
    /// anything; the author's own closing statement stands in for it.
    /// Returns whether a frame was popped.
    pub fn pop_matching(&mut self, keyword: BlockKeyword) -> bool {
        if self.frames.last().is_some_and(|top| top.keyword == keyword) {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    /// Close every block whose opening indent is at or beyond `threshold`,
    /// appending one end statement per closed block to `output`. Each end
    /// statement is indented to match its opening statement.
    ///
    /// Branch keywords (`else`, `catch`, ...) pass `indent + 1` so the frame
    /// at exactly their indent survives; the final unwind passes 0.
    pub fn close_blocks(&mut self, threshold: usize, output: &mut String) {
        while let Some(top) = self.frames.last() {
            if threshold > top.indent {
                break;
            }
            for _ in 0..top.indent {
                output.push(' ');
            }
            output.push_str(top.keyword.end_statement());
            output.push('\n');
            self.frames.pop();
        }
    }
}
