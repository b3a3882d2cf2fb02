//! File processing pipeline.
//!
//! Thin glue between the rewriting engine and the outside world: the core
//! produces a single rewritten text value, and this module streams it to any
//! `Write` implementation. The main entry point is [`rewrite_file`].

pub mod pipeline;

pub use pipeline::rewrite_file;
