//! The indentation-tracking rewrite loop.
//!
//! One pass over the input, no lookahead. Each statement line first closes
//! every block its indentation has left behind, then any buffered blank and
//! comment lines are flushed, then the statement itself is emitted. Blank
//! and comment lines are buffered rather than written immediately so that an
//! inserted `endfunction` lands directly after the function's last real
//! statement instead of after the blank lines that follow it.

use std::io::BufRead;

use anyhow::bail;

use crate::block::{BlockKeyword, BlockStack};
use crate::error::{Result, UNEXPECTED_CONTINUATION};
use crate::parser::patterns::{BRANCH_RE, CLOSER_RE, OPENER_RE};
use crate::parser::{classify, LineKind, LineSource};
use crate::rewrite::heredoc::{copy_heredoc, heredoc_terminator};

/// Rewrite a script so every block is explicitly closed.
///
/// Returns the full rewritten text, terminated lines only (`\n`), or the one
/// fatal error: [`UNEXPECTED_CONTINUATION`] when a continuation line appears
/// with no statement to continue.
pub fn append_end_statements<R: BufRead>(input: R) -> Result<String> {
    let mut source = LineSource::new(input);
    let mut blocks = BlockStack::new();
    let mut output = String::new();

    // Blank and comment lines queued since the last emitted statement.
    let mut pending_trivia = String::new();

    while let Some(line) = source.next_line()? {
        match classify(&line) {
            LineKind::Blank => {
                // Trailing spaces on an otherwise blank line are dropped.
                pending_trivia.push('\n');
            }
            LineKind::Continuation => {
                // A continuation must directly follow the line it continues.
                if output.is_empty() || !pending_trivia.is_empty() {
                    bail!(UNEXPECTED_CONTINUATION);
                }
                output.push_str(&line);
                output.push('\n');
            }
            LineKind::Comment => {
                pending_trivia.push_str(&line);
                pending_trivia.push('\n');
            }
            LineKind::Statement { indent } => {
                let statement = &line[indent..];

                let closer = CLOSER_RE
                    .captures(statement)
                    .and_then(|caps| BlockKeyword::from_closer(&caps[1]));

                if let Some(keyword) = closer {
                    // An explicit end statement. Blocks opened deeper than it
                    // still close here, but the block it names is popped
                    // without synthesizing a second end statement.
                    blocks.close_blocks(indent + 1, &mut output);
                    if !blocks.pop_matching(keyword) {
                        // Stray closer with nothing to close: an ordinary
                        // statement as far as the stack is concerned.
                        blocks.close_blocks(indent, &mut output);
                    }
                    output.push_str(&pending_trivia);
                    pending_trivia.clear();
                    output.push_str(&line);
                    output.push('\n');
                    continue;
                }

                // Branch keywords continue their enclosing block, so the
                // frame at exactly this indent must survive.
                let threshold = if BRANCH_RE.is_match(statement) {
                    indent + 1
                } else {
                    indent
                };
                blocks.close_blocks(threshold, &mut output);

                output.push_str(&pending_trivia);
                pending_trivia.clear();
                output.push_str(&line);
                output.push('\n');

                if let Some(caps) = OPENER_RE.captures(statement) {
                    // from_opener cannot fail here; the regex alternatives
                    // are exactly the opener keywords.
                    if let Some(keyword) = BlockKeyword::from_opener(&caps[1]) {
                        blocks.push(indent, keyword);
                    }
                } else if let Some(terminator) = heredoc_terminator(statement) {
                    copy_heredoc(&mut source, &terminator, &mut output)?;
                }
            }
        }
    }

    blocks.close_blocks(0, &mut output);
    output.push_str(&pending_trivia);
    Ok(output)
}

/// Convenience wrapper over [`append_end_statements`] for in-memory input.
pub fn append_end_statements_str(input: &str) -> Result<String> {
    append_end_statements(input.as_bytes())
}
