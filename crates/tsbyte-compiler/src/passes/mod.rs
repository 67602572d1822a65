//! Compiler passes.
//!
//! - [`export_walk`]: select visible declarations and lower what they contain

pub mod export_walk;

pub use export_walk::{ExportWalk, is_exported};
