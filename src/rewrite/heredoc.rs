//! Verbatim-region ("heredoc") handling.
//!
//! Certain statements introduce a span of literal text that must be copied
//! unchanged. Nothing inside it is classified, so an `if` inside a Python
//! heredoc never produces an `endif`.

use std::io::BufRead;

use crate::error::Result;
use crate::parser::patterns::{EMBED_RE, INSERT_RE, LET_HEREDOC_RE};
use crate::parser::LineSource;

/// Decide whether a statement (leading spaces removed) introduces a verbatim
/// region, and if so which line terminates it.
///
/// Three statement families qualify, checked in fixed order:
/// - `insert`/`append` (optional numeric location prefix): terminator `.`
/// - embedded-language blocks (`python3 << EOF` etc.): the given token, or
///   `.` when the token is omitted
/// - `let`/`const` literal assignments (`let v =<< trim END`): the given
///   token, which is required
#[must_use]
pub fn heredoc_terminator(statement: &str) -> Option<String> {
    if INSERT_RE.is_match(statement) {
        return Some(".".to_string());
    }
    if let Some(caps) = EMBED_RE.captures(statement) {
        let marker = &caps[2];
        return Some(if marker.is_empty() {
            ".".to_string()
        } else {
            marker.to_string()
        });
    }
    if let Some(caps) = LET_HEREDOC_RE.captures(statement) {
        return Some(caps[3].to_string());
    }
    None
}

/// Copy lines verbatim until a line exactly equal to `terminator` (included
/// in the output) or end of input. Vim accepts an unterminated heredoc, so
/// running out of input is not an error.
pub fn copy_heredoc<R: BufRead>(
    source: &mut LineSource<R>,
    terminator: &str,
    output: &mut String,
) -> Result<()> {
    while let Some(line) = source.next_line()? {
        output.push_str(&line);
        output.push('\n');
        if line == terminator {
            break;
        }
    }
    Ok(())
}
