//! Line classification and indent detection.
//!
//! Indent is the count of leading space characters only. Tabs are not
//! treated as indentation; a line whose first non-space character is a tab
//! classifies as a statement at the indent of the spaces before it. This
//! mirrors Vim's own tolerance and is a deliberate simplification.

/// What a physical line is, as far as the rewriter is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Only spaces (or nothing at all).
    Blank,
    /// Continues the previous line: leading `\`, or the `"\` continuation
    /// comment form. Copied verbatim; never opens or closes blocks.
    Continuation,
    /// First non-space character is `"` (and not the `"\` form).
    Comment,
    /// Anything else. Carries the indent at which the statement starts.
    Statement { indent: usize },
}

/// Classify a line (already stripped of its terminator).
#[must_use]
pub fn classify(line: &str) -> LineKind {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let rest = &line[indent..];
    if rest.is_empty() {
        LineKind::Blank
    } else if rest.starts_with('\\') || rest.starts_with("\"\\") {
        LineKind::Continuation
    } else if rest.starts_with('"') {
        LineKind::Comment
    } else {
        LineKind::Statement { indent }
    }
}
