//! The single-pass rewriting engine.
//!
//! This module contains the core transformation:
//! - [`rewriter`]: Walks the input line by line, tracking open blocks and
//!   inserting end statements where indentation closes them
//! - [`heredoc`]: Copies verbatim regions (`:insert`, `python <<`, `=<<`)
//!   without scanning them for statements
//!
//! The main entry point is [`append_end_statements`], which consumes a
//! buffered reader and returns the rewritten script as a string.

pub mod heredoc;
pub mod rewriter;

pub use heredoc::heredoc_terminator;
pub use rewriter::{append_end_statements, append_end_statements_str};
