//! An in-memory, type-checked program.
//!
//! [`Program`] implements [`TypeChecker`](tsbyte_core::TypeChecker) over an
//! AST assembled with [`ProgramBuilder`]. Embedders that already hold a
//! resolved AST can mirror it here; tests and benches use it as a fixture
//! provider.

mod builder;
mod error;
mod program;

pub use builder::{NamespaceNodes, ProgramBuilder};
pub use error::ProgramError;
pub use program::Program;
