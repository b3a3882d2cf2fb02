//! vimend - Inserts the end statements Vim script lets you omit
//!
//! Rewrites a Vim script so that every `if`, `for`, `while`, `try`,
//! `function`, `def` and `augroup` block is explicitly closed, using the
//! indentation of the following statement to decide where each block ends.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod block;
pub mod cli;
pub mod error;
pub mod parser;
pub mod process;
pub mod rewrite;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use error::Result;
pub use rewrite::append_end_statements;
