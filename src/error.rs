//! Error types and result aliases for vimend.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//! - [`UNEXPECTED_CONTINUATION`]: The one fatal diagnostic the rewriter raises

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;

/// Message raised for a line continuation with no statement to continue
/// (first line of input, or preceded by a blank or comment line).
pub const UNEXPECTED_CONTINUATION: &str = "Unexpected line continuation symbol.";
