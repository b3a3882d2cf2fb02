/// Regex patterns for the Vim script statements vimend cares about.
///
/// All patterns are compiled once at startup using `LazyLock` and are
/// matched against the line with its leading spaces removed. Vim keywords
/// are lowercase, so matching is case-sensitive.
use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all patterns
/// in this module are compile-time constants that are verified by tests.
/// The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

/// Keywords that open an indented block requiring an eventual end statement.
///
/// Abbreviations (e.g. `func` for `function`) are not recognized; they pass
/// through as plain statements.
pub static OPENER_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^(augroup|def|for|function|if|try|while)\b"));

/// Statements that close a block the author wrote out explicitly. The frame
/// they close is popped without synthesizing another end statement, so a
/// fully-delimited script passes through unchanged. Vim accepts any case for
/// the `augroup` end marker.
pub static CLOSER_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_re(r"^(endif|endfor|endfunction|endwhile|endtry|enddef|augroup\s+[eE][nN][dD])\b")
});

/// Keywords that continue the enclosing block rather than starting a new one.
/// A frame at exactly their indentation must stay open to receive its
/// `endif`/`endtry` later.
pub static BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^(catch|else|elseif|finally)\b"));

/// Insert-mode statements, optionally preceded by a numeric location prefix.
/// Everything up to a line consisting of a single `.` is literal text.
pub static INSERT_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^\d*(append|insert)\b"));

/// Embedded-language heredocs: `python3 << EOF` and friends. The terminator
/// token is optional; a bare `<<` means the region ends at a `.` line.
pub static EMBED_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^(lua|mzscheme|perl|python[3x]?|ruby|tcl)\s*<<\s*(\S*)"));

/// Inline-literal assignment heredocs: `let v =<< trim END`. The terminator
/// must start with a character that is neither a lowercase letter nor a
/// space, which keeps it from being confused with a plain identifier.
/// `cons` is accepted alongside `const`, as Vim itself does.
pub static LET_HEREDOC_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^(const?|let)\s*\w+\s*=<<\s*(trim|)\s*([^a-z ]\S*)"));
