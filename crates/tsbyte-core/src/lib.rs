//! Core types shared by the tsbyte crates.
//!
//! - [`SyntaxKind`]: the closed enumeration of AST node categories
//! - [`TypeChecker`]: the queries lowering makes against a type-checked program
//! - [`ClassDescriptor`] / [`SignatureDescriptor`]: exported class metadata
//! - [`CompilerOptions`]: compilation settings
//! - [`LiteralError`] / [`CompilationError`]: lowering failures

mod checker;
mod descriptor;
mod error;
mod host_hash;
mod ids;
mod modifiers;
mod options;
mod span;
mod syntax_kind;

pub use checker::{DisplayPart, DisplayPartKind, TypeChecker, display_parts_to_string};
pub use descriptor::{ClassDescriptor, SignatureDescriptor, SymbolDescriptor};
pub use error::{CompilationError, LiteralError};
pub use host_hash::{HostHash, hash_constants};
pub use ids::{FileId, NodeId, SignatureId, SymbolId, TypeId};
pub use modifiers::ModifierFlags;
pub use options::{CompilerOptions, ModuleKind, OverflowPolicy, ScriptTarget};
pub use span::Span;
pub use syntax_kind::SyntaxKind;
