//! Vim script block tracking.
//!
//! This module tracks the currently-open blocks so the rewriter knows which
//! end statements to insert when indentation decreases:
//! - [`BlockKeyword`]: The seven block-opening keywords and their end statements
//! - [`BlockStack`]: LIFO of open blocks, popped by indentation comparison

pub mod stack;
pub mod types;

pub use stack::{BlockFrame, BlockStack};
pub use types::BlockKeyword;
