//! Vim script line parsing utilities.
//!
//! This module provides the infrastructure for reading and classifying the
//! lines of a script:
//! - [`LineSource`]: Yields input lines with `\n`/`\r\n` terminators removed
//! - [`classify`]: Splits lines into blank / continuation / comment / statement
//! - [`patterns`]: Precompiled regex patterns for the statement keywords
//!
//! Only the first keyword on a line is ever examined; vimend does not parse
//! Vim script beyond that.

pub mod classify;
pub mod patterns;
pub mod stream;

pub use classify::{classify, LineKind};
pub use stream::LineSource;
